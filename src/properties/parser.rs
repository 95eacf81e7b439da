use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    crate::misc_types::*,
    crate::json_parsing::*,
    crate::error::SimError,
};

#[derive(Debug, StructOpt, Clone)]
/// Print node and edge count of a graph
pub struct Properties
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,
}

impl Properties {
    pub fn parse(&self) -> Result<(PropertiesParams, Value), SimError>
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self) -> Result<(), SimError>
    {
        let (param, _) = self.parse()?;
        super::execute::execute_properties(param)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PropertiesParams
{
    pub graph: GraphSource,
    pub initial_weight: f64,
    pub graph_seed: u64
}

impl Default for PropertiesParams
{
    fn default() -> Self {
        Self{
            graph: GraphSource::default(),
            initial_weight: DEFAULT_INITIAL_WEIGHT,
            graph_seed: DEFAULT_GRAPH_SEED
        }
    }
}
