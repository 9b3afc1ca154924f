use std::path::PathBuf;
use std::process;

use clap::Parser;
use learn_dash::Dashboard;

/// Terminal learning dashboard: courses, quizzes, and video lessons.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with a quiz definition replacing the built-in quiz
    #[arg(short, long)]
    quiz: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let dashboard = match args.quiz {
        Some(path) => Dashboard::with_quiz_file(path),
        None => Ok(Dashboard::new()),
    };

    let dashboard = match dashboard {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = dashboard.run() {
        eprintln!("Error running dashboard: {}", e);
        process::exit(1);
    }
}
