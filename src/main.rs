use{
    std::{
        process::exit,
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*
};

pub mod error;
pub mod sir_model;
pub mod misc_types;
pub mod stats_methods;
pub mod json_parsing;
pub mod logging;
pub mod simulate;
pub mod monte_carlo;
pub mod properties;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let start_time = Instant::now();
    if let Err(e) = logging::init_logging(){
        eprintln!("{e}");
        exit(1);
    }
    let opt = CmdOption::from_args();
    let res = match opt{
        CmdOption::Simulate(o) => o.execute(),
        CmdOption::MonteCarlo(o) => o.execute(),
        CmdOption::Properties(o) => o.execute()
    };
    if let Err(e) = res{
        log::error!("{e}");
        exit(1);
    }
    println!("Execution took {}",humantime::format_duration(start_time.elapsed()))
}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}


#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Epidemic simulations on directed route networks!")]
pub enum CmdOption
{
    Simulate(simulate::Simulate),
    MonteCarlo(monte_carlo::MonteCarlo),
    Properties(properties::Properties)
}
