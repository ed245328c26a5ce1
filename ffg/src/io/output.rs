use serde::{Deserialize, Serialize};
use sheetpack::io::ext_repr::{ExtArrangementResult, ExtLayoutRequest};

use crate::config::FFGConfig;
use crate::opt::multi_start::TrialSummary;

/// Everything written to the solution file: the request, its arrangement and the config used to produce it
#[derive(Serialize, Deserialize, Clone)]
pub struct FFGOutput {
    #[serde(flatten)]
    pub request: ExtLayoutRequest,
    pub solution: ExtArrangementResult,
    #[serde(default)]
    pub trials: Vec<TrialSummary>,
    pub config: FFGConfig,
}
