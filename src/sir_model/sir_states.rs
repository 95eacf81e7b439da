use {
    serde::{Serialize, Deserialize},
    std::fmt
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfectionState{
    Susceptible,
    Infected,
    Cured,
}
impl InfectionState{
    pub const ALL: [InfectionState; 3] = [
        InfectionState::Susceptible,
        InfectionState::Infected,
        InfectionState::Cured
    ];

    pub fn sus_check(&self) -> bool{
        matches!(self,InfectionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self,InfectionState::Infected)
    }
    pub fn cured_check(&self) -> bool{
        matches!(self,InfectionState::Cured)
    }

    pub fn name(self) -> &'static str
    {
        match self{
            Self::Susceptible => "susceptible",
            Self::Infected => "infected",
            Self::Cured => "cured",
        }
    }
}

impl Default for InfectionState{
    fn default() -> Self{
        InfectionState::Susceptible
    }
}

impl fmt::Display for InfectionState{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// Number of nodes in each state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts{
    pub susceptible: usize,
    pub infected: usize,
    pub cured: usize
}

impl StatusCounts{
    pub fn add(&mut self, state: InfectionState)
    {
        match state{
            InfectionState::Susceptible => self.susceptible += 1,
            InfectionState::Infected => self.infected += 1,
            InfectionState::Cured => self.cured += 1
        }
    }

    pub fn total(&self) -> usize
    {
        self.susceptible + self.infected + self.cured
    }
}
