//! Canonical net and bus-bit names.
//!
//! Bits of a bus are written `name[index]`. The emitter depends on this exact
//! byte sequence.

use crate::error::NameError;
use vqm_netlist::{Pin, WHOLE_PIN};

/// Appends `[index]` to `name`.
///
/// Fails for negative indices.
pub fn append_index(name: &str, index: i64) -> Result<String, NameError> {
    if index < 0 {
        return Err(NameError::NegativeIndex {
            name: name.to_string(),
            index,
        });
    }
    Ok(format!("{name}[{index}]"))
}

/// Returns the canonical name of bit `index` of `pin`.
///
/// - A non-indexed wire is always named by its plain name, whatever `index` is.
/// - [`WHOLE_PIN`] on a bus is only meaningful for a one-bit bus and names
///   its single bit `name[left]`; on a wider bus it is a broken contract,
///   since the validator rejects such references.
/// - Any other index is appended as-is; negative ones are rejected.
pub fn resolve_name(pin: &Pin, index: i32) -> Result<String, NameError> {
    if !pin.indexed {
        return Ok(pin.name.clone());
    }
    if index == WHOLE_PIN {
        if !pin.is_single_bit() {
            return Err(NameError::WholeBusReference {
                name: pin.name.clone(),
                left: pin.left,
                right: pin.right,
            });
        }
        return append_index(&pin.name, i64::from(pin.left));
    }
    append_index(&pin.name, i64::from(index))
}
