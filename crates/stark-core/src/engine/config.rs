use crate::core::field::evaluator::CutoffPolicy;
use crate::core::field::model::ChargeModel;
use crate::core::io::report::ReportForm;
use crate::core::io::table::LengthUnit;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("At least one probe atom must be configured")]
    NoProbes,
}

/// A solute atom at which the solvent field is evaluated.
///
/// `neighbors` names the two atoms spanning the bisector at this probe.
/// Probes without a neighbor pair report their projection as undefined
/// unconditionally, which is how a deployment designates a single
/// projection-carrying probe: configure neighbors for that probe only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSpec {
    pub name: String,
    pub neighbors: Option<(String, String)>,
}

impl ProbeSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            neighbors: None,
        }
    }

    pub fn with_neighbors(name: &str, n1: &str, n2: &str) -> Self {
        Self {
            name: name.to_string(),
            neighbors: Some((n1.to_string(), n2.to_string())),
        }
    }
}

/// Full configuration of one field-trace run.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    /// Distance cutoff in the ingested length unit (Bohr).
    pub cutoff: f64,
    pub charge_model: ChargeModel,
    pub cutoff_policy: CutoffPolicy,
    /// Residue names treated as solvent; empty means every residue.
    pub solvent_resnames: Vec<String>,
    pub probes: Vec<ProbeSpec>,
    pub report_form: ReportForm,
    pub input_unit: LengthUnit,
}

impl TraceConfig {
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::default()
    }

    /// Probe names in configuration order, as used for wide-form columns.
    pub fn probe_names(&self) -> Vec<String> {
        self.probes.iter().map(|p| p.name.clone()).collect()
    }
}

#[derive(Default)]
pub struct TraceConfigBuilder {
    cutoff: Option<f64>,
    charge_model: Option<ChargeModel>,
    cutoff_policy: Option<CutoffPolicy>,
    solvent_resnames: Option<Vec<String>>,
    probes: Option<Vec<ProbeSpec>>,
    report_form: Option<ReportForm>,
    input_unit: Option<LengthUnit>,
}

impl TraceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn charge_model(mut self, model: ChargeModel) -> Self {
        self.charge_model = Some(model);
        self
    }
    pub fn cutoff_policy(mut self, policy: CutoffPolicy) -> Self {
        self.cutoff_policy = Some(policy);
        self
    }
    pub fn solvent_resnames(mut self, resnames: Vec<String>) -> Self {
        self.solvent_resnames = Some(resnames);
        self
    }
    pub fn probes(mut self, probes: Vec<ProbeSpec>) -> Self {
        self.probes = Some(probes);
        self
    }
    pub fn report_form(mut self, form: ReportForm) -> Self {
        self.report_form = Some(form);
        self
    }
    pub fn input_unit(mut self, unit: LengthUnit) -> Self {
        self.input_unit = Some(unit);
        self
    }

    pub fn build(self) -> Result<TraceConfig, ConfigError> {
        let probes = self.probes.ok_or(ConfigError::MissingParameter("probes"))?;
        if probes.is_empty() {
            return Err(ConfigError::NoProbes);
        }

        Ok(TraceConfig {
            cutoff: self.cutoff.ok_or(ConfigError::MissingParameter("cutoff"))?,
            charge_model: self
                .charge_model
                .ok_or(ConfigError::MissingParameter("charge_model"))?,
            cutoff_policy: self.cutoff_policy.unwrap_or_default(),
            solvent_resnames: self.solvent_resnames.unwrap_or_default(),
            probes,
            report_form: self.report_form.unwrap_or_default(),
            input_unit: self.input_unit.unwrap_or_default(),
        })
    }
}
