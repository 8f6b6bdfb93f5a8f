use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use clap::Parser;
use log::LevelFilter;

use rainbow_bar::*;

#[derive(Parser)]
#[command(author, version, about = "Rainbow colored progress bars")]
struct Cli {
    /// List all predefined gradients and exit.
    #[arg(long)]
    list_colors: bool,
    /// Build bars with the rainbow style.
    #[arg(long)]
    apply: bool,
    /// Turn colors off: bars use the plain style.
    #[arg(long)]
    disable: bool,
    /// Oscillations of the color over a full run.
    ///
    /// Use with caution: high values flicker quickly.
    #[arg(long, default_value_t = 0.3)]
    frequency: f64,
    /// Phase shift of the color cycle (radians).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    phase_shift: f64,
    /// Pick a random phase shift instead of `--phase-shift`.
    #[arg(long, conflicts_with = "phase_shift")]
    random_phase: bool,
    /// Seed for `--random-phase`.
    #[arg(long, requires = "random_phase")]
    seed: Option<u64>,
    /// Colors per transition (at least 2).
    #[arg(long, default_value_t = 15)]
    steps: usize,
    /// Use this predefined gradient instead of the color wheel.
    #[arg(long, value_name = "NAME")]
    gradient: Option<String>,
    /// Show a demonstration progress bar, or echo TEXT.
    #[arg(long, value_name = "TEXT", num_args = 0..=1,
          default_missing_value = "progress")]
    test: Option<String>,
    /// Print more log messages (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn phase(&self) -> PhaseSource {
        match (self.random_phase, self.seed) {
            (true, Some(seed)) => PhaseSource::Seeded(seed),
            (true, None) => PhaseSource::Entropy,
            (false, _) => PhaseSource::Fixed(self.phase_shift),
        }
    }

    fn config(&self) -> Result<RainbowConfig> {
        if self.steps < 2 { return Err(Error::InvalidStepCount(self.steps)) }
        let cfg = RainbowConfig::default()
            .frequency(self.frequency)
            .phase(self.phase())
            .steps(self.steps);
        match &self.gradient {
            Some(name) => cfg.preset(name),
            None => Ok(cfg),
        }
    }

    fn factory(&self, switch: &ColorSwitch) -> Result<StyleFactory> {
        if self.disable {
            Ok(StyleFactory::plain())
        } else {
            // Without `--apply` the demonstration still shows colors.
            Ok(StyleFactory::rainbow(self.config()?, switch.clone()))
        }
    }
}

fn list_presets(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Predefined gradients:")?;
    for name in preset_names() {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}

fn demo(factory: &StyleFactory) -> Result<()> {
    println!("Testing progress bar for 5 seconds:");
    let mut out = io::stdout().lock();
    let mut bar = factory.bar(Some(50), "Testing")?;
    bar.draw(&mut out)?;
    for _ in 0 .. 50 {
        thread::sleep(Duration::from_millis(100));
        bar.update(1);
        bar.draw(&mut out)?;
    }
    bar.finish(&mut out)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let switch = ColorSwitch::new();
    if cli.disable { switch.disable() }

    if cli.list_colors {
        list_presets(&mut io::stdout().lock())?;
        return Ok(())
    }

    let factory = cli.factory(&switch)?;
    if cli.apply && !cli.disable {
        log::info!("rainbow style applied");
    }

    match cli.test.as_deref() {
        Some("progress") => demo(&factory)?,
        Some(text) => println!("Testing text: {text}"),
        None => (),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["rainbow-bar"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn listing() {
        let mut out = Vec::new();
        list_presets(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Predefined gradients:");
        assert_eq!(lines[1], "- green");
        assert_eq!(lines[13], "- green_to_yellow");
        assert_eq!(lines.len(), 1 + preset_names().len());
    }

    #[test]
    fn bare_test_flag_runs_demo() {
        assert_eq!(parse(&["--test"]).test.as_deref(), Some("progress"));
        assert_eq!(parse(&["--test", "hello"]).test.as_deref(), Some("hello"));
        assert_eq!(parse(&[]).test, None);
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.config().unwrap(), RainbowConfig::default());
    }

    #[test]
    fn disable_selects_plain() {
        let switch = ColorSwitch::new();
        let cli = parse(&["--disable"]);
        assert!(matches!(cli.factory(&switch).unwrap(), StyleFactory::Plain));
        let cli = parse(&["--apply"]);
        assert!(matches!(cli.factory(&switch).unwrap(),
                         StyleFactory::Rainbow { .. }));
    }

    #[test]
    fn phase_flags() {
        assert_eq!(parse(&["--random-phase", "--seed", "3"]).phase(),
                   PhaseSource::Seeded(3));
        assert_eq!(parse(&["--random-phase"]).phase(), PhaseSource::Entropy);
        assert_eq!(parse(&["--phase-shift", "-1.5"]).phase(),
                   PhaseSource::Fixed(-1.5));
        assert!(Cli::try_parse_from(["rainbow-bar", "--seed", "3"]).is_err());
    }

    #[test]
    fn bad_settings() {
        let switch = ColorSwitch::new();
        assert!(matches!(parse(&["--steps", "1"]).factory(&switch),
                         Err(Error::InvalidStepCount(1))));
        assert!(matches!(parse(&["--gradient", "teal"]).factory(&switch),
                         Err(Error::UnknownGradientName(_))));
        let cfg = parse(&["--gradient", "cyan", "--steps", "4"]).config()
            .unwrap();
        assert_eq!(cfg.transitions.len(), 1);
        assert_eq!(cfg.steps_per_transition, 4);
    }
}
