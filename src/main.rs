use clap::Parser;
use keymouse::{Config, remap_device};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Keyboard-driven mouse emulation for an evdev keyboard
#[derive(Parser, Debug)]
#[command(name = "keymouse")]
#[command(about = "Grab a keyboard and turn key chords into mouse motion and clicks", long_about = None)]
#[command(version)]
struct Args {
    /// Input device to grab, e.g. /dev/input/event3
    #[arg(value_name = "DEVICE")]
    device: PathBuf,

    /// uinput node used to create the synthetic device
    #[arg(long, value_name = "PATH", default_value = keymouse::config::DEFAULT_UINPUT_PATH)]
    uinput: PathBuf,

    /// Name of the synthetic device
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Pointer step of the first movement event
    #[arg(
        long,
        value_name = "N",
        default_value_t = keymouse::state::DEFAULT_BASE_SPEED,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    base_speed: i32,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.device);
        config.uinput = self.uinput;
        config.base_speed = self.base_speed;
        if let Some(name) = self.name {
            config.identity.name = name;
        }
        config
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{}", err);
            process::exit(1);
        }
    };

    init_logging();

    if let Err(e) = remap_device(&args.into_config()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_speed_must_be_positive() {
        for speed in ["0", "-3", "-2147483648"] {
            let args = Args::try_parse_from(["keymouse", "/dev/input/event0", "--base-speed", speed]);
            assert!(args.is_err(), "accepted base speed {}", speed);
        }
    }

    #[test]
    fn test_args_into_config() {
        let args = Args::try_parse_from([
            "keymouse",
            "/dev/input/event3",
            "--base-speed",
            "4",
            "--name",
            "Pointer Keys",
        ])
        .unwrap();
        let config = args.into_config();
        assert_eq!(config.device, PathBuf::from("/dev/input/event3"));
        assert_eq!(config.uinput, PathBuf::from("/dev/uinput"));
        assert_eq!(config.base_speed, 4);
        assert_eq!(config.identity.name, "Pointer Keys");
    }
}
