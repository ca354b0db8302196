use std::{str::FromStr, time::Duration};

use duolife::{CellState, Grid, GridResult};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use thiserror::Error;

const DEFAULT_SIZE: (i32, i32) = (64, 64);

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value for --{name}: {value:?}")]
    Value { name: &'static str, value: String },
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("t", "console", "run in console mode");
        opts.optflag("p", "print", "print the final grid");
        opts.optopt("r", "rows", "set grid rows", "ROWS");
        opts.optopt("c", "columns", "set grid columns", "COLUMNS");
        opts.optopt("f", "fill", "set fill type (random, empty, block)", "TYPE");
        opts.optopt("s", "seed", "seed for the random fill", "SEED");
        opts.optopt(
            "",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: duolife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        // surface malformed values before the simulation starts
        args.rows()?;
        args.columns()?;
        args.seed()?;
        args.sleep()?;
        args.generations()?;
        args.fill_mode()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        // argv may be empty when exec'd without a program name
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn opt_parse<V: FromStr>(&self, name: &'static str) -> Result<Option<V>, OptionsError> {
        match self.matches.opt_str(name) {
            Some(value) => match value.parse() {
                Ok(parsed) => Ok(Some(parsed)),
                Err(_) => Err(OptionsError::Value { name, value }),
            },
            None => Ok(None),
        }
    }

    fn rows(&self) -> Result<Option<i32>, OptionsError> {
        self.opt_parse("rows")
    }
    fn columns(&self) -> Result<Option<i32>, OptionsError> {
        self.opt_parse("columns")
    }
    fn seed(&self) -> Result<Option<u64>, OptionsError> {
        self.opt_parse("seed")
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn print(&self) -> bool {
        self.matches.opt_present("print")
    }

    pub fn generations(&self) -> Result<usize, OptionsError> {
        Ok(self.opt_parse("gens")?.unwrap_or(usize::MAX)) // unbounded
    }
    pub fn sleep(&self) -> Result<Option<Duration>, OptionsError> {
        Ok(match self.opt_parse("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        })
    }

    /// Grid size as `(rows, columns)`. Console mode defaults to the terminal
    /// size, leaving one line for the report footer.
    pub fn grid_size(&self) -> Result<(i32, i32), OptionsError> {
        let default = match crossterm::terminal::size() {
            Ok((cols, rows)) if self.console() => (i32::from(rows) - 1, i32::from(cols)),
            _ => DEFAULT_SIZE,
        };

        Ok((
            self.rows()?.unwrap_or(default.0),
            self.columns()?.unwrap_or(default.1),
        ))
    }
    pub fn fill_mode(&self) -> Result<FillMode, OptionsError> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("random");
        FillMode::new(mode_str).ok_or_else(|| OptionsError::Value {
            name: "fill",
            value: mode_str.to_owned(),
        })
    }

    pub fn rng(&self) -> Result<StdRng, OptionsError> {
        Ok(match self.seed()? {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        })
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

#[derive(Debug)]
pub enum FillMode {
    Random,
    Empty,
    Block,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "empty" => Some(Self::Empty),
            "block" => Some(Self::Block),
            _ => None,
        }
    }

    /// Seeds `grid` in place.
    pub fn fill(&self, grid: &mut Grid, rng: &mut dyn RngCore) -> GridResult<()> {
        match self {
            Self::Random => grid.randomize(Some(rng)),
            Self::Empty => {
                grid.clear();
                Ok(())
            }
            Self::Block => {
                // 2x2 block around the centre, one color per diagonal
                grid.clear();
                let (row, column) = (grid.rows() / 2, grid.columns() / 2);
                grid.cell_mut(row, column).set_state(CellState::ColorA);
                grid.cell_mut(row + 1, column + 1).set_state(CellState::ColorA);
                grid.cell_mut(row, column + 1).set_state(CellState::ColorB);
                grid.cell_mut(row + 1, column).set_state(CellState::ColorB);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Args {
        Args::new(args).expect("valid args").expect("not --help")
    }

    #[test]
    fn fill_mode_parses() {
        let args = args(&["--fill", "block"]);

        assert!(matches!(args.fill_mode(), Ok(FillMode::Block)));
    }

    #[test]
    fn fill_mode_defaults_to_random() {
        assert!(matches!(args(&[]).fill_mode(), Ok(FillMode::Random)));
    }

    #[test]
    fn rejects_unknown_fill_mode() {
        let err = Args::new(&["--fill", "checkers"]).err();

        assert!(matches!(err, Some(OptionsError::Value { name: "fill", .. })));
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = Args::new(&["--rows", "ten"]).err();

        assert!(matches!(err, Some(OptionsError::Value { name: "rows", .. })));
    }

    #[test]
    fn grid_size_uses_options() {
        let args = args(&["-r", "12", "-c", "30"]);

        assert_eq!(args.grid_size().unwrap(), (12, 30));
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let empty: [String; 0] = [];
        let args = Args::new(&empty).expect("valid args").expect("not --help");

        assert_eq!(args.grid_size().unwrap(), DEFAULT_SIZE);
        assert_eq!(args.generations().unwrap(), usize::MAX);
        assert!(args.sleep().unwrap().is_none());
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn seeded_rng_fill_is_reproducible() {
        let args = args(&["--seed", "99"]);
        let mut first = Grid::new(8, 8).unwrap();
        let mut second = Grid::new(8, 8).unwrap();
        FillMode::Random
            .fill(&mut first, &mut args.rng().unwrap())
            .unwrap();
        FillMode::Random
            .fill(&mut second, &mut args.rng().unwrap())
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn block_fill_is_centred() {
        let mut grid = Grid::new(6, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        FillMode::Block.fill(&mut grid, &mut rng).unwrap();

        assert_eq!(grid.to_string(), "......\n......\n......\n...ab.\n...ba.\n......");
        assert_eq!(grid.population().alive(), 4);
    }

    #[test]
    fn empty_fill_clears() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        FillMode::Random.fill(&mut grid, &mut rng).unwrap();
        FillMode::Empty.fill(&mut grid, &mut rng).unwrap();

        assert_eq!(grid.population().alive(), 0);
    }
}
