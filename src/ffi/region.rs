//! Region extraction for bulk renderer updates.

use super::Handle;

/// Extracts a rectangular region of the current generation into a flat buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
///
/// # Safety
/// - `ptr` must be a valid Handle pointer from `lg_create*()`, or null
/// - `out_buf` must point to at least `buf_len` writable bytes, or be null
/// - Coordinates are clamped to lattice bounds; negative values clamp to 0
///
/// # Returns
/// Number of bytes written, or 0 on error (null pointer, idle simulation,
/// empty region, or `buf_len` smaller than the clamped region).
#[no_mangle]
pub unsafe extern "C" fn lg_extract_region(
    ptr: *const Handle,
    out_buf: *mut u8,
    buf_len: usize,
    min_x: i32,
    min_y: i32,
    min_z: i32,
    max_x: i32,
    max_y: i32,
    max_z: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let view = match (*ptr).current() {
        Some(view) => view,
        None => return 0,
    };

    let clamp = |v: i32| v.max(0) as usize;
    let out = std::slice::from_raw_parts_mut(out_buf, buf_len);
    view.extract_region(
        out,
        [clamp(min_x), clamp(min_y), clamp(min_z)],
        [clamp(max_x), clamp(max_y), clamp(max_z)],
    ) as u64
}
