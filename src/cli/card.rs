//! Card CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, format_card_details, format_card_list};
use crate::error::{BrieflyError, BrieflyResult};
use crate::models::{CardId, CategoryKey, ChartKind};
use crate::services::{Dashboard, Intent, Outcome};
use crate::storage::KeyValueStore;

/// Card subcommands
#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// List all cards with their totals
    List,

    /// Show one card with its legend
    Show {
        /// Card ID
        card: String,
    },

    /// Switch a category on or off
    Toggle {
        /// Card ID
        card: String,
        /// Category key (land, slab, fence, pool, furniture, upgrades, contingency)
        category: CategoryKey,
    },

    /// Set a category amount
    Set {
        /// Card ID
        card: String,
        /// Category key
        category: CategoryKey,
        /// Amount (e.g., "18000", "$18,000.50"); anything unparseable stores 0
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Switch between donut and bar chart
    Chart {
        /// Card ID
        card: String,
        /// Chart kind (donut or bar)
        kind: ChartKind,
    },

    /// Change a card's title
    Rename {
        /// Card ID
        card: String,
        /// New title
        title: String,
    },

    /// Add a card copied from the REPC template
    Add,
}

/// Handle a card command
pub fn handle_card_command<S: KeyValueStore>(
    dashboard: &mut Dashboard<S>,
    settings: &Settings,
    cmd: CardCommands,
) -> BrieflyResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CardCommands::List => {
            println!("{}", format_card_list(dashboard.cards(), symbol));
        }

        CardCommands::Show { card } => {
            let found = dashboard
                .card(&card)
                .ok_or_else(|| BrieflyError::card_not_found(&card))?;
            print!("{}", format_card_details(found, dashboard.color_mode(), symbol));
        }

        CardCommands::Toggle { card, category } => {
            let outcome = dashboard.dispatch(Intent::ToggleCategory {
                card_id: CardId::new(card.as_str()),
                key: category,
            })?;
            require_applied(dashboard, &outcome, &card, category)?;

            let on = dashboard
                .card(&card)
                .and_then(|c| c.category(category))
                .map(|c| c.on)
                .unwrap_or(false);
            println!(
                "{} {} on {}",
                if on { "Enabled" } else { "Disabled" },
                category,
                card
            );
            print_total(dashboard, &card, symbol);
        }

        CardCommands::Set {
            card,
            category,
            value,
        } => {
            let outcome = dashboard.dispatch(Intent::SetCategoryValue {
                card_id: CardId::new(card.as_str()),
                key: category,
                raw: value,
            })?;
            require_applied(dashboard, &outcome, &card, category)?;

            let stored = dashboard
                .card(&card)
                .and_then(|c| c.category(category))
                .map(|c| c.value)
                .unwrap_or_default();
            println!("Set {} on {} to {}", category, card, format_amount(stored, symbol));
            print_total(dashboard, &card, symbol);
        }

        CardCommands::Chart { card, kind } => {
            let outcome = dashboard.dispatch(Intent::SetChartKind {
                card_id: CardId::new(card.as_str()),
                kind,
            })?;
            if !outcome.is_applied() {
                return Err(BrieflyError::card_not_found(&card));
            }
            println!("Chart for {} is now {}", card, kind);
        }

        CardCommands::Rename { card, title } => {
            let outcome = dashboard.dispatch(Intent::RenameCard {
                card_id: CardId::new(card.as_str()),
                title,
            })?;
            if !outcome.is_applied() {
                return Err(BrieflyError::card_not_found(&card));
            }
            if let Some(renamed) = dashboard.card(&card) {
                println!("Renamed {} to \"{}\"", card, renamed.title);
            }
        }

        CardCommands::Add => {
            let outcome = dashboard.dispatch(Intent::AddCard)?;
            if let Some(id) = outcome.card_id() {
                println!("Added card: {}", id);
                print_total(dashboard, id.as_str(), symbol);
            }
        }
    }

    Ok(())
}

/// Turn a tolerant no-op back into an error the user can see
fn require_applied<S: KeyValueStore>(
    dashboard: &Dashboard<S>,
    outcome: &Outcome,
    card: &str,
    category: CategoryKey,
) -> BrieflyResult<()> {
    if outcome.is_applied() {
        return Ok(());
    }
    if dashboard.card(card).is_none() {
        Err(BrieflyError::card_not_found(card))
    } else {
        Err(BrieflyError::category_not_found(format!("{}/{}", card, category)))
    }
}

fn print_total<S: KeyValueStore>(dashboard: &Dashboard<S>, card: &str, symbol: &str) {
    if let Some(total) = dashboard.total(card) {
        println!("  Total: {}", format_amount(total, symbol));
    }
}
