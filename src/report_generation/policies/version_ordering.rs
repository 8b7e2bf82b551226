use crate::shared::error::ReportError;
use crate::shared::Result;

/// Oldest recipe tag the report understands.
pub const MINIMUM_TAG: &str = "0.3.0";

/// `tag_key(MINIMUM_TAG)` - tags below this key are rejected.
pub const MINIMUM_TAG_KEY: u64 = 30;

/// Encodes a dotted version tag as a single ordering key.
///
/// Component `i` (counted left to right) contributes `10^i * value`, so
/// the leftmost component is the least significant digit: "0.3.1" gives
/// `0 + 30 + 100 = 130`. This matches the encoding the published recipe
/// tags were screened against; components of 10 or more overlap adjacent
/// digit positions, so the key does not order such tags the way semantic
/// versioning would. Keep any change here in lockstep with
/// `MINIMUM_TAG_KEY`.
pub fn tag_key(tag: &str) -> Result<u64> {
    let mut key: u64 = 0;
    for (position, component) in tag.split('.').enumerate() {
        let value: u64 = component
            .parse()
            .map_err(|e| ReportError::InvalidRecipeTag {
                tag: tag.to_string(),
                details: format!("component \"{}\" is not a number: {}", component, e),
            })?;
        let weight = 10u64
            .checked_pow(position as u32)
            .ok_or_else(|| ReportError::InvalidRecipeTag {
                tag: tag.to_string(),
                details: "too many components".to_string(),
            })?;
        key = key
            .checked_add(weight.checked_mul(value).ok_or_else(|| {
                ReportError::InvalidRecipeTag {
                    tag: tag.to_string(),
                    details: format!("component \"{}\" is too large", component),
                }
            })?)
            .ok_or_else(|| ReportError::InvalidRecipeTag {
                tag: tag.to_string(),
                details: "key overflow".to_string(),
            })?;
    }
    Ok(key)
}
