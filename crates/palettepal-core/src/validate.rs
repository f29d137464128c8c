use crate::error::{PalError, Result};
use crate::phase::array::PHASE_LEN;
use crate::search::config::SearchConfig;
use crate::vps::VPS_LEN;

pub fn validate_search_config(c: &SearchConfig) -> Result<()> {
    if c.workers == 0 {
        return Err(PalError::Validation("workers must be >= 1".into()));
    }
    if c.batch == 0 {
        return Err(PalError::Validation("batch must be >= 1".into()));
    }
    if let Some(p) = c.anchors.iter().find(|&&p| p == 0 || p >= PHASE_LEN) {
        return Err(PalError::Validation(format!(
            "anchor position {p} outside 1..{PHASE_LEN}"
        )));
    }
    // color_count can never exceed the VPS size.
    if c.threshold as usize >= VPS_LEN {
        return Err(PalError::Validation(format!(
            "threshold {} is unreachable (max color_count is {VPS_LEN})",
            c.threshold
        )));
    }
    Ok(())
}
