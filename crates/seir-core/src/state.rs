//! Epidemiological compartment enum shared by every crate.

/// The SEIR compartment an agent is in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EpiState {
    /// Never infected; can be exposed by a nearby Infectious agent.
    #[default]
    Susceptible,
    /// Infected but not yet infectious; counts down the incubation timer.
    Exposed,
    /// Spreads the disease; recovers stochastically.
    Infectious,
    /// Terminal.
    Recovered,
}

impl EpiState {
    /// Lowercase label, as written to the CSV and SQLite outputs.
    pub fn as_str(self) -> &'static str {
        match self {
            EpiState::Susceptible => "susceptible",
            EpiState::Exposed     => "exposed",
            EpiState::Infectious  => "infectious",
            EpiState::Recovered   => "recovered",
        }
    }
}

impl std::fmt::Display for EpiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
