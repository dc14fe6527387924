//! Profile command handlers.

use mesto_core::{
    Command as CoreCommand, CommandResult, Controller, CurrentUser, PopupKind, ProfileUpdate,
};

use crate::cli::{GlobalOpts, ProfileArgs, ProfileCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Detail view ─────────────────────────────────────────────────────

fn detail(user: &CurrentUser, color: bool) -> String {
    let mut fields = vec![
        ("ID", user.id.to_string()),
        ("Name", user.name.clone()),
        ("About", user.about.clone()),
        ("Avatar", user.avatar_url.clone()),
    ];
    if let Some(ref cohort) = user.cohort {
        fields.push(("Cohort", cohort.clone()));
    }
    output::detail_lines(&fields, color)
}

fn print_user(user: &CurrentUser, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color);
    let out = output::render_single(
        global.output,
        user,
        |u| detail(u, color),
        |u| u.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn signed_in_user(controller: &Controller) -> Result<CurrentUser, CliError> {
    controller
        .snapshot()
        .current_user
        .as_deref()
        .cloned()
        .ok_or_else(|| CliError::AuthFailed {
            profile: "current".into(),
            message: "profile not loaded".into(),
        })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: ProfileArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProfileCommand::Show => print_user(&signed_in_user(controller)?, global),

        ProfileCommand::Edit { name, about } => {
            let current = signed_in_user(controller)?;
            let name = match name {
                Some(name) => name,
                None => util::prompt_text("Name", &current.name)?,
            };
            let about = match about {
                Some(about) => about,
                None => util::prompt_text("About", &current.about)?,
            };

            controller
                .execute(CoreCommand::OpenPopup(PopupKind::EditProfile))
                .await?;
            let result = controller
                .execute(CoreCommand::UpdateProfile(ProfileUpdate::new(name, about)))
                .await?;
            print_result(result, global)
        }

        ProfileCommand::Avatar { url } => {
            controller
                .execute(CoreCommand::OpenPopup(PopupKind::EditAvatar))
                .await?;
            let result = controller
                .execute(CoreCommand::UpdateAvatar { avatar_url: url })
                .await?;
            print_result(result, global)
        }
    }
}

fn print_result(result: CommandResult, global: &GlobalOpts) -> Result<(), CliError> {
    if let CommandResult::User(user) = result {
        print_user(&user, global)?;
    }
    if !global.quiet {
        eprintln!("Profile updated");
    }
    Ok(())
}
