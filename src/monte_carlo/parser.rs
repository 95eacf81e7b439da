use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::num::*,
    crate::misc_types::*,
    crate::json_parsing::*,
    crate::error::SimError,
};

#[derive(Debug, StructOpt, Clone)]
/// Repeat the simulation with independent seeds and average the daily metrics
pub struct MonteCarlo
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Number of threads to use
    #[structopt(long)]
    num_threads: Option<NonZeroUsize>
}

impl MonteCarlo {
    pub fn parse(&self) -> Result<(MonteCarloParams, Value), SimError>
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self) -> Result<(), SimError>
    {
        let (param, json) = self.parse()?;
        super::execute::execute_monte_carlo(param, json, self.num_threads)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonteCarloParams
{
    pub graph: GraphSource,
    pub initial_weight: f64,
    pub initial_infected: usize,
    pub days: usize,
    pub cutoff: f64,
    pub graph_seed: u64,
    pub sir_seed: u64,
    pub samples: usize,
    /// Name is generated from the parameters if not given
    pub output_file: Option<String>
}

impl MonteCarloParams
{
    pub fn quick_name(&self, num_threads: Option<NonZeroUsize>) -> String
    {
        let j = match num_threads
        {
            None => "".to_owned(),
            Some(v) => format!("j{}", v)
        };
        format!(
            "v{}MonteCarlo_Graph{}InW{}InInf{}Days{}Cut{}Sam{}GS{}SS{}{}.csv",
            crate::VERSION,
            self.graph.name(),
            self.initial_weight,
            self.initial_infected,
            self.days,
            self.cutoff,
            self.samples,
            self.graph_seed,
            self.sir_seed,
            j
        )
    }

    pub fn output_name(&self, num_threads: Option<NonZeroUsize>) -> String
    {
        self.output_file
            .clone()
            .unwrap_or_else(|| self.quick_name(num_threads))
    }

    pub fn validate(&self) -> Result<(), SimError>
    {
        check_probability("cutoff", self.cutoff)?;
        check_probability("initial_weight", self.initial_weight)?;
        if let GraphSource::ErdosRenyi{p, ..} = self.graph{
            check_probability("p", p)?;
        }
        if self.samples == 0 {
            return Err(SimError::InvalidParameter("samples has to be positive".to_owned()));
        }
        Ok(())
    }
}

impl Default for MonteCarloParams
{
    fn default() -> Self {
        Self{
            graph: GraphSource::ErdosRenyi{
                n: DEFAULT_ER_SIZE,
                p: DEFAULT_ER_PROB
            },
            initial_weight: DEFAULT_INITIAL_WEIGHT,
            initial_infected: DEFAULT_INITIAL_INFECTED,
            days: DEFAULT_DAYS,
            cutoff: DEFAULT_CUTOFF,
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
            samples: DEFAULT_SAMPLES,
            output_file: None
        }
    }
}
