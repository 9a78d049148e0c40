mod agent;
mod card;
mod game;
mod hand;

use anyhow::Context;
use prettytable::{Cell, Row, Table};

use crate::config::Config;
use crate::persist;
use crate::telemetry::LogObserver;

pub use agent::{evaluate, player_totals, stick_at_20, Agent, MAX_ACES};
pub use card::Face;
pub use game::{Action, State};

pub fn print_policy(agent: &Agent) {
    let mut table = Table::new();

    // Print header.
    let mut header = Vec::new();
    header.push(Cell::new(""));
    header.push(Cell::new("Aces"));
    for dealer_face in Face::ALL.iter() {
        header.push(Cell::new(dealer_face.symbol()));
    }
    table.add_row(Row::new(header));

    for aces in 0..=MAX_ACES {
        for player_total in player_totals() {
            let mut cells = Vec::new();
            cells.push(Cell::new(&format!("{}", player_total)));
            cells.push(Cell::new(&format!("{}", aces)));
            for dealer_face in Face::ALL.iter() {
                let state = State {
                    player_total,
                    aces,
                    dealer_face: *dealer_face,
                };
                match agent.policy(&state) {
                    Action::Hit => cells.push(Cell::new("H")),
                    Action::Stay => cells.push(Cell::new("S")),
                }
            }
            table.add_row(Row::new(cells));
        }
    }
    table.printstd();
}

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut rng = config.rng();

    let mut agent = match &config.resume {
        Some(path) => {
            let records = persist::load(path)?;
            let agent = Agent::from_records(&records)
                .with_context(|| format!("cannot resume from {}", path.display()))?;
            log::info!(
                "resumed from {} with {} recorded visits",
                path.display(),
                agent.table().total_visits()
            );
            agent
        }
        None => Agent::new(),
    };

    log::info!("training for {} episodes", config.episodes);
    let summary = agent.play_episodes(config.episodes, &mut rng, &mut LogObserver);
    log::info!(
        "training finished wins={} draws={} losses={} average_reward={:.4}",
        summary.wins,
        summary.draws,
        summary.losses,
        summary.average_reward()
    );

    if config.print_policy {
        print_policy(&agent);
    }

    // Compare the learned policy against the naive one.
    if config.evaluate > 0 {
        let learned = |state: &State| agent.policy(state);
        let optimal_returns = evaluate(&learned, config.evaluate, &mut rng);
        let naive_returns = evaluate(&stick_at_20, config.evaluate, &mut rng);
        log::info!("average naive returns: {:.4}", naive_returns);
        log::info!("average learned returns: {:.4}", optimal_returns);
    }

    let records = agent.records();
    persist::save(&config.output, &records)
        .with_context(|| format!("learned table lost, cannot save {}", config.output.display()))?;
    log::info!("saved {} entries to {}", records.len(), config.output.display());
    Ok(())
}
