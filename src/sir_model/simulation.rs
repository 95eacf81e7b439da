use{
    rand_pcg::Pcg64,
    rand::SeedableRng,
    crate::error::SimError,
    super::*
};

/// Receives the graph state at the two points of a cycle that leave
/// the simulation: right after reweighting and once the metrics are known.
pub trait SimObserver{
    fn reweighted(&mut self, _day: usize, _graph: &RouteGraph) -> Result<(), SimError>
    {
        Ok(())
    }

    fn record(&mut self, metrics: &CycleMetrics) -> Result<(), SimError>;
}

/// Keeps the metrics in memory
#[derive(Clone, Debug, Default)]
pub struct MetricsLog{
    pub records: Vec<CycleMetrics>
}

impl SimObserver for MetricsLog{
    fn record(&mut self, metrics: &CycleMetrics) -> Result<(), SimError>
    {
        self.records.push(*metrics);
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct EpidemicSimulation{
    graph: RouteGraph,
    rng: Pcg64,
    cutoff: f64
}

impl EpidemicSimulation{
    pub fn from_graph(graph: RouteGraph, cutoff: f64, sir_seed: u64) -> Self
    {
        Self::from_graph_and_rng(graph, cutoff, Pcg64::seed_from_u64(sir_seed))
    }

    pub fn from_graph_and_rng(graph: RouteGraph, cutoff: f64, rng: Pcg64) -> Self
    {
        Self{
            graph,
            rng,
            cutoff
        }
    }

    pub fn graph(&self) -> &RouteGraph
    {
        &self.graph
    }

    pub fn infect_nodes(&mut self, count: usize) -> Result<Vec<String>, SimError>
    {
        self.graph.infect_nodes(count, &mut self.rng)
    }

    /// reweight -> export -> infect -> cure -> metrics
    pub fn run_cycle<O: SimObserver>(&mut self, day: usize, observer: &mut O) -> Result<CycleMetrics, SimError>
    {
        recal_edge_weights(&mut self.graph, &mut self.rng)?;
        observer.reweighted(day, &self.graph)?;
        let infected = simulate_infection(&mut self.graph, self.cutoff)?;
        let cured = simulate_curing(&mut self.graph, &mut self.rng)?;
        let metrics = compute_metrics(&self.graph, day);
        log::debug!(
            "day {}: {} newly infected, {} cured -> S {} I {} C {} avg {:?}",
            day,
            infected,
            cured,
            metrics.susceptible,
            metrics.infected,
            metrics.cured,
            metrics.avg_inbound_weight_infected
        );
        observer.record(&metrics)?;
        Ok(metrics)
    }

    /// Runs the days `1..no_of_days`, i.e. `no_of_days - 1` cycles
    pub fn run<O: SimObserver>(&mut self, no_of_days: usize, observer: &mut O) -> Result<Vec<CycleMetrics>, SimError>
    {
        let mut records = Vec::with_capacity(no_of_days.saturating_sub(1));
        for day in 1..no_of_days
        {
            records.push(self.run_cycle(day, observer)?);
        }
        if let Some(last) = records.last(){
            log::info!(
                "finished {} cycles: S {} I {} C {}",
                records.len(),
                last.susceptible,
                last.infected,
                last.cured
            );
        }
        Ok(records)
    }
}
