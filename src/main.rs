use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use timedrill::api::http::HttpBackend;
use timedrill::app::App;
use timedrill::labels;
use timedrill::logging::{self, json_log, log_at, obj, v_str, Level};
use timedrill::orchestrator::Orchestrator;
use timedrill::reducer::Action;
use timedrill::render::text::TextSurface;
use timedrill::render::Surface;
use timedrill::state::{BirthProfile, Calendar, Config, Gender};

const HELP: &str = "\
commands:
  generate <date> <time> [male|female] [solar|lunar] [leap]
  drill <cell#>    zoom into a rendered cell
  back             return to the coarser view
  prev | next      page the year (year view only)
  quit";

fn parse_generate(parts: &[&str]) -> Option<BirthProfile> {
    let birth_date = parts.first()?.trim();
    let birth_time = parts.get(1)?.trim();
    if birth_date.is_empty() || birth_time.is_empty() {
        return None;
    }
    let gender = match parts.get(2).copied() {
        Some("female") => Gender::Female,
        _ => Gender::Male,
    };
    let calendar = match parts.get(3).copied() {
        Some("lunar") => Calendar::Lunar,
        _ => Calendar::Solar,
    };
    Some(BirthProfile {
        gender,
        calendar,
        birth_date: birth_date.to_string(),
        birth_time: birth_time.to_string(),
        is_leap_month: parts.get(4).copied() == Some("leap"),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(Level::from_env());
    let cfg = Config::from_env();
    json_log("startup", obj(&[("api_base", v_str(&cfg.api_base))]));

    let backend = HttpBackend::new(&cfg)?;
    let orchestrator = Orchestrator::new(Box::new(backend));
    if let Err(err) = orchestrator.health().await {
        log_at(Level::Warn, "backend_unreachable", obj(&[("error", v_str(&err.to_string()))]));
    }

    let mut app = App::new(orchestrator, TextSurface::new());
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.split_first() {
            Some((&"generate", rest)) => match parse_generate(rest) {
                Some(profile) => app.dispatch(Action::Generate(profile)).await,
                None => app.surface.set_grid_status(labels::MSG_FILL_BIRTH),
            },
            Some((&"drill", rest)) => {
                let cell = rest
                    .first()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| app.surface.cell_timestamps.get(i).cloned());
                match cell {
                    Some(iso_datetime) => app.dispatch(Action::CellClick { iso_datetime }).await,
                    None => println!("无此单元格。"),
                }
            }
            Some((&"back", _)) => app.dispatch(Action::Back).await,
            Some((&"prev", _)) => app.dispatch(Action::PageYear(-1)).await,
            Some((&"next", _)) => app.dispatch(Action::PageYear(1)).await,
            Some((&"quit", _)) | Some((&"exit", _)) => break,
            Some((&"help", _)) => println!("{HELP}"),
            Some(_) => println!("{HELP}"),
            None => {}
        }
    }

    Ok(())
}
