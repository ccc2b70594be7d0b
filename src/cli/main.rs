#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use yogic::{context::Context, types::err::{self}};

mod args;
mod programs;

fn main() {
    let args = args::Args::parse();

    #[cfg(feature = "log")]
    init_logging(args.log_level.into());

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c Error when configuring: {}", err::ErrorKind::from(e));
            std::process::exit(1);
        }
    };

    let program = programs::build(args.program);
    let mut the_context = Context::from_config(config);

    println!("c Resolving: {}", args.program);
    let result = the_context.solve(&program.goal);

    for solution in the_context.solutions() {
        let values = program
            .shown
            .iter()
            .map(|variable| format!("{variable} = {}", solution.get(variable)))
            .collect::<Vec<_>>();
        println!("v {}", values.join(", "));
    }

    let code = match result {
        Ok(report) => {
            println!("s {report}");
            0
        }
        Err(e) => {
            println!("s Incomplete: {e}");
            2
        }
    };

    if args.stats {
        let counters = &the_context.counters;
        println!("c Solutions: {}", counters.total_solutions);
        println!("c Bounces:   {}", counters.total_bounces);
        println!("c Time:      {:.2?}", counters.time);
    }

    std::process::exit(code);
}

#[cfg(feature = "log")]
fn init_logging(level: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} [{t}] {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("c Logging unavailable: {e}");
            }
        }
        Err(e) => eprintln!("c Logging unavailable: {e}"),
    }
}
