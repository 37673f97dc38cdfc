//! Greedy palette quantization.
//!
//! Turns an RGBA image into a packed indexed bitmap plus a resolved
//! 16-slot palette, honoring a [`PaletteTemplate`] that can pin slots to
//! specific hardware colors or exclude them outright. Only fully opaque
//! pixels carry color; everything else comes out transparent.
//!
//! The reduction is greedy: starting from all 64 hardware colors as
//! candidates, it repeatedly drops the candidate whose removal adds the
//! least weighted error (usage count times the distance by which each
//! affected pixel color falls back to its next-best candidate) until the
//! usable slot count is reached, then sheds candidates the image never
//! maps to.

use tracing::debug;

use crate::bitmap::IndexedBitmap;
use crate::color::{closest_ega_color, EgaColor, Rgba8, EGA_COLORS};
use crate::palette::{Palette, PaletteTemplate, TemplateSlot, PALETTE_SIZE};

use super::candidates::RankTable;
use super::error::QuantizeError;

/// Result of a quantization run.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Packed bitmap; opaque source pixels hold palette slots, all other
    /// pixels are transparent.
    pub bitmap: IndexedBitmap,
    /// Resolved palette. Slots the reduction left empty stay at color 0.
    pub palette: Palette,
}

/// Quantize `pixels` (row-major, `width * height` entries) against
/// `template`.
///
/// # Errors
///
/// [`QuantizeError::BufferSizeMismatch`] when the buffer length does not
/// match the dimensions, [`QuantizeError::NoUsableSlots`] when the
/// template excludes every slot.
pub fn encode(
    pixels: &[Rgba8],
    width: u32,
    height: u32,
    template: &PaletteTemplate,
) -> Result<Encoded, QuantizeError> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(QuantizeError::BufferSizeMismatch {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    // Template bookkeeping. Forced hardware colors are pinned candidates
    // with a fixed slot; free slots get filled from the survivors. A
    // color pinned into several slots occupies all of them but counts as
    // one candidate, keyed to its first slot.
    let mut forced_slot: [Option<usize>; EGA_COLORS] = [None; EGA_COLORS];
    let mut removable = [true; EGA_COLORS];
    let mut free_slots = 0usize;
    for slot in 0..PALETTE_SIZE {
        match template.slot(slot) {
            TemplateSlot::Color(color) => {
                removable[color.index()] = false;
                if forced_slot[color.index()].is_none() {
                    forced_slot[color.index()] = Some(slot);
                }
            }
            TemplateSlot::Undefined => free_slots += 1,
            TemplateSlot::Unused => {}
        }
    }
    let forced_nodes = removable.iter().filter(|&&r| !r).count();
    let total_count = free_slots + forced_nodes;
    if total_count == 0 {
        return Err(QuantizeError::NoUsableSlots);
    }

    // Classify every opaque pixel to its nearest hardware color. The
    // nearest-color search runs once per distinct source color; pixels
    // then resolve through a binary search on the raw value.
    let mut distinct: Vec<u32> = pixels
        .iter()
        .filter(|p| p.is_opaque())
        .map(|p| p.to_raw())
        .collect();
    distinct.sort_unstable();
    distinct.dedup();
    let lookup: Vec<(u32, u8)> = distinct
        .iter()
        .map(|&raw| (raw, closest_ega_color(Rgba8::from_raw(raw)).value()))
        .collect();

    let mut counts = [0u64; EGA_COLORS];
    let mut classified: Vec<Option<u8>> = Vec::with_capacity(pixels.len());
    for pixel in pixels {
        let class = if pixel.is_opaque() {
            lookup
                .binary_search_by_key(&pixel.to_raw(), |&(raw, _)| raw)
                .ok()
                .map(|pos| lookup[pos].1)
        } else {
            None
        };
        if let Some(hw) = class {
            counts[hw as usize] += 1;
        }
        classified.push(class);
    }

    // Reduce the candidate set down to the usable slot count, always
    // dropping the cheapest removal. Ties go to the lowest color id.
    let mut table = RankTable::new(removable);
    let mut last_cost = [0.0f64; EGA_COLORS];
    while table.alive_count() > total_count {
        let mut victim: Option<(usize, f64)> = None;
        for candidate in 0..EGA_COLORS {
            if !table.is_alive(candidate) || !table.is_removable(candidate) {
                continue;
            }
            let cost = table.removal_cost(candidate, &counts);
            last_cost[candidate] = cost;
            if victim.map_or(true, |(_, best)| cost < best) {
                victim = Some((candidate, cost));
            }
        }
        let Some((candidate, cost)) = victim else {
            break;
        };
        debug!(candidate, cost, "dropping palette candidate");
        table.remove(candidate);
    }

    // Shed survivors the image never maps to. Their removal cost is
    // zero, so the palette loses nothing by leaving their slots free.
    for candidate in 0..EGA_COLORS {
        if !table.is_alive(candidate) || !table.is_removable(candidate) {
            continue;
        }
        let cost = table.removal_cost(candidate, &counts);
        last_cost[candidate] = cost;
        if cost == 0.0 {
            debug!(candidate, "dropping unused palette candidate");
            table.remove(candidate);
        }
    }

    // Slot assignment: pinned colors keep their slots, then survivors
    // fill the remaining free slots, most important first.
    let mut retained: Vec<usize> = (0..EGA_COLORS)
        .filter(|&c| table.is_alive(c) && table.is_removable(c))
        .collect();
    retained.sort_by(|&a, &b| last_cost[b].total_cmp(&last_cost[a]));

    let mut palette = Palette::default();
    let mut taken = [false; PALETTE_SIZE];
    for slot in 0..PALETTE_SIZE {
        match template.slot(slot) {
            TemplateSlot::Color(color) => {
                palette.set(slot, color);
                taken[slot] = true;
            }
            TemplateSlot::Unused => taken[slot] = true,
            TemplateSlot::Undefined => {}
        }
    }
    let mut node_slot = forced_slot;
    for &candidate in &retained {
        if let Some(slot) = taken.iter().position(|&t| !t) {
            taken[slot] = true;
            palette.set(slot, EgaColor::from_index(candidate));
            node_slot[candidate] = Some(slot);
        }
    }

    // Every hardware color resolves to the slot of its ranking's head.
    let mut color_lut = [0u8; EGA_COLORS];
    for target in 0..EGA_COLORS {
        if let Some(slot) = table.head(target).and_then(|head| node_slot[head]) {
            color_lut[target] = slot as u8;
        }
    }

    let mut bitmap = IndexedBitmap::new(width, height);
    let mut i = 0;
    for y in 0..height {
        for x in 0..width {
            if let Some(hw) = classified[i] {
                bitmap.set_pixel_raw(x, y, color_lut[hw as usize]);
            }
            i += 1;
        }
    }

    debug!(
        width,
        height,
        distinct = lookup.len(),
        retained = retained.len(),
        forced = forced_nodes,
        "quantized image"
    );
    Ok(Encoded { bitmap, palette })
}
