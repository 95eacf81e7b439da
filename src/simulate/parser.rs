use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    crate::misc_types::*,
    crate::json_parsing::*,
    crate::error::SimError,
};

#[derive(Debug, StructOpt, Clone)]
/// Run a single epidemic simulation and write the daily metrics
pub struct Simulate
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,
}

impl Simulate {
    pub fn parse(&self) -> Result<(SimulateParams, Value), SimError>
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self) -> Result<(), SimError>
    {
        let (param, json) = self.parse()?;
        super::execute::execute_simulation(param, json)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulateParams
{
    pub graph: GraphSource,
    pub initial_weight: f64,
    pub initial_infected: usize,
    pub days: usize,
    pub cutoff: f64,
    pub graph_seed: u64,
    pub sir_seed: u64,
    /// Name is generated from the parameters if not given
    pub metrics_file: Option<String>,
    /// Node-link json of the graph, rewritten after every reweighting
    pub export_json: Option<String>
}

impl SimulateParams
{
    pub fn quick_name(&self) -> String
    {
        format!(
            "v{}Simulate_Graph{}InW{}InInf{}Days{}Cut{}GS{}SS{}.csv",
            crate::VERSION,
            self.graph.name(),
            self.initial_weight,
            self.initial_infected,
            self.days,
            self.cutoff,
            self.graph_seed,
            self.sir_seed
        )
    }

    pub fn metrics_name(&self) -> String
    {
        self.metrics_file
            .clone()
            .unwrap_or_else(|| self.quick_name())
    }

    pub fn validate(&self) -> Result<(), SimError>
    {
        check_probability("cutoff", self.cutoff)?;
        check_probability("initial_weight", self.initial_weight)?;
        if let GraphSource::ErdosRenyi{p, ..} = self.graph{
            check_probability("p", p)?;
        }
        Ok(())
    }
}

impl Default for SimulateParams
{
    fn default() -> Self {
        Self{
            graph: GraphSource::default(),
            initial_weight: DEFAULT_INITIAL_WEIGHT,
            initial_infected: DEFAULT_INITIAL_INFECTED,
            days: DEFAULT_DAYS,
            cutoff: DEFAULT_CUTOFF,
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
            metrics_file: Some("metrics_files.csv".to_owned()),
            export_json: Some("flight_sim_data.json".to_owned())
        }
    }
}
