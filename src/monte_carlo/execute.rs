use {
    super::parser::*,
    serde_json::Value,
    std::{
        fs::File,
        io::BufWriter,
        num::*,
        path::Path
    },
    crate::{indication_bar, misc_types::ONE},
    crate::sir_model::*,
    crate::stats_methods::*,
    crate::error::SimError,
    rayon::prelude::*,
    rand_pcg::Pcg64,
    rand::{Rng, SeedableRng},
};

/// Statistics of one day over all runs
#[derive(Clone, Debug, PartialEq)]
pub struct DayStatistics
{
    pub day: usize,
    pub susceptible: MyVariance,
    pub infected: MyVariance,
    pub cured: MyVariance,
    pub avg_inbound_weight_infected: Option<f64>,
    /// runs in which the average weight was defined
    pub defined_runs: usize
}

pub fn execute_monte_carlo(
    param: MonteCarloParams,
    json: Value,
    num_threads: Option<NonZeroUsize>
) -> Result<(), SimError>
{
    let stats = run_monte_carlo(&param, num_threads)?;
    let name = param.output_name(num_threads);
    write_statistics(&stats, &name, &[json])?;
    log::info!("wrote statistics of {} samples to {}", param.samples, name);
    Ok(())
}

/// One seed per run, drawn from the master seed. Run `k` gets the same
/// seed no matter how many threads are used.
pub fn run_seeds(sir_seed: u64, samples: usize) -> Vec<u64>
{
    let mut master = Pcg64::seed_from_u64(sir_seed);
    (0..samples)
        .map(|_| master.gen())
        .collect()
}

pub fn run_monte_carlo(
    param: &MonteCarloParams,
    num_threads: Option<NonZeroUsize>
) -> Result<Vec<DayStatistics>, SimError>
{
    param.validate()?;
    let graph = param.graph.build(param.initial_weight, param.graph_seed)?;
    let system_size = graph.node_count();

    let j = num_threads.unwrap_or(ONE);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(j.get())
        .build()
        .map_err(|e| SimError::InvalidParameter(format!("thread pool: {e}")))?;

    let seeds = run_seeds(param.sir_seed, param.samples);
    let bar = indication_bar(param.samples as u64);

    let runs: Vec<Vec<CycleMetrics>> = pool.install(
        || seeds.par_iter()
            .map(
                |&seed| -> Result<Vec<CycleMetrics>, SimError>
                {
                    // every run works on its own copy of the graph
                    let mut model = EpidemicSimulation::from_graph(graph.clone(), param.cutoff, seed);
                    model.infect_nodes(param.initial_infected)?;
                    let records = model.run(param.days, &mut MetricsLog::default())?;
                    bar.inc(1);
                    Ok(records)
                }
            ).collect::<Result<Vec<_>, SimError>>()
    )?;
    bar.finish_with_message("Done");
    log::debug!("{} runs on a graph with {} nodes", runs.len(), system_size);

    Ok(aggregate(&runs))
}

/// Runs all have the same length
pub fn aggregate(runs: &[Vec<CycleMetrics>]) -> Vec<DayStatistics>
{
    let days = runs.first()
        .map_or(0, |r| r.len());
    (0..days)
        .map(
            |i|
            {
                let of_day = |f: fn(&CycleMetrics) -> usize| -> Vec<usize> {
                    runs.iter().map(|r| f(&r[i])).collect()
                };
                let weights: Vec<_> = runs.iter()
                    .map(|r| r[i].avg_inbound_weight_infected)
                    .collect();
                let (avg, defined_runs) = defined_average(&weights);
                DayStatistics{
                    day: runs[0][i].day,
                    susceptible: MyVariance::from_slice(&of_day(|m| m.susceptible), None),
                    infected: MyVariance::from_slice(&of_day(|m| m.infected), None),
                    cured: MyVariance::from_slice(&of_day(|m| m.cured), None),
                    avg_inbound_weight_infected: avg,
                    defined_runs
                }
            }
        ).collect()
}

pub fn write_statistics<P: AsRef<Path>>(stats: &[DayStatistics], path: P, jsons: &[Value]) -> Result<(), SimError>
{
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| SimError::io(path, e))?;
    let mut buf = BufWriter::new(file);
    write_jsons(jsons, &mut buf)
        .map_err(|e| SimError::io(path, e))?;

    let mut writer = csv::Writer::from_writer(buf);
    writer.write_record([
        "day",
        "mean_susceptible",
        "var_susceptible",
        "mean_infected",
        "var_infected",
        "mean_cured",
        "var_cured",
        "mean_avg_inbound_weight_infected",
        "defined_runs"
    ])?;
    for s in stats
    {
        writer.write_record(
            &[
                s.day.to_string(),
                s.susceptible.mean().to_string(),
                s.susceptible.variance().to_string(),
                s.infected.mean().to_string(),
                s.infected.variance().to_string(),
                s.cured.mean().to_string(),
                s.cured.variance().to_string(),
                s.avg_inbound_weight_infected.map(|w| w.to_string()).unwrap_or_default(),
                s.defined_runs.to_string()
            ]
        )?;
    }
    writer.flush()
        .map_err(|e| SimError::io(path, e))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::misc_types::*;

    fn small_param() -> MonteCarloParams
    {
        MonteCarloParams{
            graph: GraphSource::ErdosRenyi{n: 40, p: 0.1},
            initial_infected: 5,
            days: 8,
            cutoff: 0.2,
            samples: 12,
            ..MonteCarloParams::default()
        }
    }

    #[test]
    fn independent_of_thread_count()
    {
        let param = small_param();
        let one = run_monte_carlo(&param, NonZeroUsize::new(1)).unwrap();
        let three = run_monte_carlo(&param, NonZeroUsize::new(3)).unwrap();
        assert_eq!(one.len(), 7);
        assert_eq!(one, three);
        for s in one.iter()
        {
            let total = s.susceptible.mean() + s.infected.mean() + s.cured.mean();
            assert!((total - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn aggregates_per_day()
    {
        let m = |day, infected, w| CycleMetrics{
            day,
            susceptible: 10 - infected,
            infected,
            cured: 0,
            avg_inbound_weight_infected: w
        };
        let runs = vec![
            vec![m(1, 2, Some(0.5)), m(2, 4, None)],
            vec![m(1, 4, Some(0.7)), m(2, 4, None)],
        ];
        let stats = aggregate(&runs);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].infected.mean(), 3.0);
        assert_eq!(stats[0].infected.variance(), 1.0);
        assert_eq!(stats[0].defined_runs, 2);
        assert!((stats[0].avg_inbound_weight_infected.unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(stats[1].avg_inbound_weight_infected, None);
        assert_eq!(stats[1].day, 2);
    }

    #[test]
    fn writes_header_comments()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mc.csv");
        let param = small_param();
        let stats = run_monte_carlo(&param, None).unwrap();
        write_statistics(&stats, &path, &[serde_json::to_value(&param).unwrap()]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("#{"));
        assert!(lines.next().unwrap().starts_with("day,mean_susceptible"));
        assert_eq!(lines.count(), 7);
    }

    #[test]
    fn seeds_are_reproducible()
    {
        assert_eq!(run_seeds(5, 10), run_seeds(5, 10));
        assert_eq!(run_seeds(5, 10)[..4], run_seeds(5, 4)[..]);
    }
}
