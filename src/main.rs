use std::{io, thread, time::Duration};

mod console;
mod options;
mod stats;

use duolife::Grid;
use stats::Recorder;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt::writer::OptionalWriter};

/// Poll interval while paused in console mode without a configured sleep.
const PAUSED_POLL: Duration = Duration::from_millis(50);

/// Log output target. Raw mode owns the terminal in console mode, so logs are
/// dropped there instead of drawing over the grid.
fn log_writer(console: bool) -> Option<fn() -> io::Stderr> {
    if console { None } else { Some(io::stderr) }
}

fn init_tracing(console: bool) -> io::Result<()> {
    let directive: Directive = "duolife=info".parse().map_err(io::Error::other)?;
    let writer = log_writer(console);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(move || -> OptionalWriter<io::Stderr> { writer.map(|make| make()).into() })
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let Some(args) = options::Args::from_env().map_err(io::Error::other)? else {
        return Ok(());
    };
    init_tracing(args.console())?;

    // setup the grid
    let (rows, columns) = args.grid_size().map_err(io::Error::other)?;
    let mut rng = args.rng().map_err(io::Error::other)?;
    let mut grid = Grid::new(rows, columns).map_err(io::Error::other)?;
    args.fill_mode()
        .map_err(io::Error::other)?
        .fill(&mut grid, &mut rng)
        .map_err(io::Error::other)?;
    info!(rows, columns, alive = grid.population().alive(), "starting simulation");

    let generations = args.generations().map_err(io::Error::other)?;
    let sleep = args.sleep().map_err(io::Error::other)?;
    let stats_file = args.stats_file();
    let mut stats = stats::SwitchRecorder::new(grid.population(), stats_file.is_some());
    let mut console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };

    let mut generation = 0;
    let mut paused = false;
    'generations: while generation < generations {
        let mut step = false;
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    console::ConsoleCommand::Clear => grid.clear(),
                    console::ConsoleCommand::Randomize => {
                        grid.randomize(Some(&mut rng)).map_err(io::Error::other)?
                    }
                    console::ConsoleCommand::TogglePause => paused = !paused,
                    console::ConsoleCommand::Step => step = true,
                    console::ConsoleCommand::Handled => {}
                }
            }
            console.render(&grid)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                info!("{}", report);
            }
        }

        if paused && !step {
            thread::sleep(sleep.unwrap_or(PAUSED_POLL));
            continue;
        }

        grid.advance_generation();
        generation += 1;
        stats.record(grid.population());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    let population = grid.population();
    info!(
        generation,
        red = population.color_a,
        blue = population.color_b,
        "simulation finished"
    );
    if args.print() {
        println!("{}", grid);
    }
    if let Some(file_name) = stats_file {
        stats.save(file_name)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_mode_discards_logs() {
        assert!(log_writer(true).is_none());
        assert!(log_writer(false).is_some());
    }
}
