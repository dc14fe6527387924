//! Card command handlers.

use mesto_core::{
    CardId, CardView, Command as CoreCommand, CommandResult, Controller, NewCard, PopupKind,
};
use tabled::Tabled;

use crate::cli::{CardsArgs, CardsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Likes")]
    likes: String,
    #[tabled(rename = "Mine")]
    mine: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl CardRow {
    fn new(view: &CardView, color: bool) -> Self {
        Self {
            id: view.id.to_string(),
            name: view.name.clone(),
            likes: format!("{} {}", output::heart(view.liked_by_me, color), view.like_count),
            mine: if view.owned_by_me { "yes".into() } else { String::new() },
            image: view.image_url.clone(),
        }
    }
}

fn detail(view: &CardView, color: bool) -> String {
    output::detail_lines(
        &[
            ("ID", view.id.to_string()),
            ("Name", view.name.clone()),
            (
                "Likes",
                format!("{} {}", output::heart(view.liked_by_me, color), view.like_count),
            ),
            ("Mine", String::from(if view.owned_by_me { "yes" } else { "no" })),
            ("Image", view.image_url.clone()),
        ],
        color,
    )
}

/// The feed as the signed-in user sees it.
fn view_of(controller: &Controller, id: &CardId) -> Result<CardView, CliError> {
    controller
        .snapshot()
        .card_views()
        .into_iter()
        .find(|v| &v.id == id)
        .ok_or_else(|| CliError::NotFound {
            resource_type: "card".into(),
            identifier: id.to_string(),
            list_command: "cards list".into(),
        })
}

fn print_card(view: &CardView, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color);
    let out = output::render_single(
        global.output,
        view,
        |v| detail(v, color),
        |v| v.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: CardsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CardsCommand::List { mine, liked, limit } => {
            let views: Vec<CardView> = controller
                .snapshot()
                .card_views()
                .into_iter()
                .filter(|v| !mine || v.owned_by_me)
                .filter(|v| !liked || v.liked_by_me)
                .take(limit.unwrap_or(usize::MAX))
                .collect();

            let color = output::should_color(global.color);
            let out = output::render_list(
                global.output,
                &views,
                |v| CardRow::new(v, color),
                |v| v.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CardsCommand::Show { id } => {
            let card = util::resolve_card(controller, &id)?;
            print_card(&view_of(controller, &card.id)?, global)
        }

        CardsCommand::Like { id } => {
            let card = util::resolve_card(controller, &id)?;
            controller
                .execute(CoreCommand::ToggleLike {
                    id: card.id.clone(),
                })
                .await?;
            print_card(&view_of(controller, &card.id)?, global)
        }

        CardsCommand::Delete { id } => {
            let card = util::resolve_card(controller, &id)?;
            controller
                .execute(CoreCommand::RequestDelete {
                    id: card.id.clone(),
                })
                .await?;

            if !util::confirm(
                &format!("Delete card '{}' ({})?", card.name, card.id),
                "cards delete",
                global.yes,
            )? {
                controller.execute(CoreCommand::CloseAll).await?;
                return Ok(());
            }

            controller.execute(CoreCommand::ConfirmDelete).await?;
            if !global.quiet {
                eprintln!("Card deleted");
            }
            Ok(())
        }

        CardsCommand::Add { name, link } => {
            controller
                .execute(CoreCommand::OpenPopup(PopupKind::AddPlace))
                .await?;
            let result = controller
                .execute(CoreCommand::AddCard(NewCard::new(name, link)))
                .await?;
            if let CommandResult::Card(card) = result {
                print_card(&view_of(controller, &card.id)?, global)?;
            }
            if !global.quiet {
                eprintln!("Card published");
            }
            Ok(())
        }
    }
}
