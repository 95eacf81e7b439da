use{
    serde::{Serialize, Deserialize},
    std::{num::NonZeroUsize, path::Path},
    rand_pcg::Pcg64,
    rand::SeedableRng,
    crate::error::SimError,
    crate::sir_model::*,
};

pub const DEFAULT_INITIAL_INFECTED: usize = 20;
pub const DEFAULT_DAYS: usize = 50;
pub const DEFAULT_CUTOFF: f64 = 0.10;
pub const DEFAULT_INITIAL_WEIGHT: f64 = 0.1;
pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;
pub const DEFAULT_SAMPLES: usize = 1000;
pub const DEFAULT_EDGE_LIST: &str = "Airport_Routes_Trimmed.txt";
pub const DEFAULT_ER_SIZE: usize = 345;
pub const DEFAULT_ER_PROB: f64 = 0.3;
pub const ONE: NonZeroUsize = match NonZeroUsize::new(1){
    Some(v) => v,
    None => panic!("1 is not zero")
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum GraphSource{
    /// whitespace separated `from to` pairs, one per line
    EdgeList(String),
    ErdosRenyi{
        n: usize,
        p: f64
    }
}

impl GraphSource{
    pub fn name(&self) -> String
    {
        match self
        {
            Self::EdgeList(path) => {
                let stem = Path::new(path)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!("el{}", stem)
            },
            Self::ErdosRenyi{n, p} => format!("er{}p{}", n, p)
        }
    }

    /// `graph_seed` is only used for random graphs
    pub fn build(&self, initial_weight: f64, graph_seed: u64) -> Result<RouteGraph, SimError>
    {
        match self
        {
            Self::EdgeList(path) => load_edge_list_file(path, initial_weight),
            Self::ErdosRenyi{n, p} => {
                let mut rng = Pcg64::seed_from_u64(graph_seed);
                Ok(erdos_renyi(*n, *p, initial_weight, &mut rng))
            }
        }
    }
}

impl Default for GraphSource{
    fn default() -> Self
    {
        Self::EdgeList(DEFAULT_EDGE_LIST.to_owned())
    }
}

/// Checks shared by all parameter sets
pub fn check_probability(name: &str, value: f64) -> Result<(), SimError>
{
    if (0.0..=1.0).contains(&value){
        Ok(())
    } else {
        Err(SimError::InvalidParameter(format!("{name} has to be in [0, 1], got {value}")))
    }
}
