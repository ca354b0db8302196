use duolife::Population;
use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::Instant,
};

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, population: Population);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    population: Population,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(population: Population) -> Self {
        Self {
            gens: 0,
            population,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, population: Population) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.population = population;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= 500
    }
    fn report(&mut self) -> Self::Str {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, red:{}, blue:{}",
            gens_per_sec, self.gens, self.population.color_a, self.population.color_b
        )
    }
}

pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, Population)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(population: Population) -> Self {
        Self {
            inner: SimpleRecord::new(population),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"gen,delta_t,dead,color_a,color_b\n")?;
        // row n holds the population after generation n
        for (i, (delta, population)) in self.data.iter().enumerate() {
            writeln!(
                out,
                "{},{},{},{},{}",
                i + 1,
                delta,
                population.dead,
                population.color_a,
                population.color_b
            )?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = fs::File::create(path)?;
        self.write_to(io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    type Str = <SimpleRecord as Recorder>::Str;

    fn record(&mut self, population: Population) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, population));
        self.inner.record(population);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> Self::Str {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(population: Population, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(population))
        } else {
            Self::Simple(SimpleRecord::new(population))
        }
    }
    /// Writes the CSV history. Does nothing unless recording CSV.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        match self {
            Self::Csv(r) => r.save(path),
            Self::Simple(_) => Ok(()),
        }
    }
}
impl Recorder for SwitchRecorder {
    type Str = String;

    fn record(&mut self, population: Population) {
        match self {
            Self::Csv(r) => r.record(population),
            Self::Simple(r) => r.record(population),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> Self::Str {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(dead: usize, color_a: usize, color_b: usize) -> Population {
        Population {
            dead,
            color_a,
            color_b,
        }
    }

    #[test]
    fn report_counts_generations() {
        let mut stats = SimpleRecord::new(population(4, 0, 0));
        stats.record(population(2, 1, 1));
        stats.record(population(1, 2, 1));

        let report = stats.report();
        assert!(report.ends_with("gens:2, red:2, blue:1"), "{report}");
        assert_eq!(stats.gens_in_report, 0);
    }

    #[test]
    fn csv_has_one_line_per_generation() {
        let mut stats = CsvRecord::new(population(9, 0, 0));
        stats.record(population(5, 3, 1));
        stats.record(population(9, 0, 0));

        let mut out = Vec::new();
        stats.write_to(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "gen,delta_t,dead,color_a,color_b");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,") && lines[1].ends_with(",5,3,1"));
        assert!(lines[2].starts_with("2,") && lines[2].ends_with(",9,0,0"));
    }
}
