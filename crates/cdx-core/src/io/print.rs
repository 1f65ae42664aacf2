use crate::models::geometry::Bounds;
use std::fmt;

const LOGICAL_DPI: f64 = 72.0;
const PRINT_DPI: i32 = 600;
const SLOTS: usize = 60;

/// Legacy Macintosh print record embedded verbatim in document headers.
///
/// The slot indices and constants form a fixed interoperability contract
/// with existing readers; none of them are tunable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MacPrintInfo([i32; SLOTS]);

impl MacPrintInfo {
    pub(crate) fn new(height: i32, width: i32) -> Self {
        let mut slots = [0_i32; SLOTS];
        slots[0] = 3; // record version
        slots[2] = PRINT_DPI;
        slots[3] = PRINT_DPI;
        slots[6] = height;
        slots[7] = width;
        slots[10] = height;
        slots[11] = width;
        slots[12] = 871; // layout constant expected by readers
        slots[13] = height / 5; // legacy scaling coefficient
        slots[14] = width / 5;
        slots[24] = 100; // horizontal scale, percent
        slots[25] = 100; // vertical scale, percent
        Self(slots)
    }
}

impl fmt::Display for MacPrintInfo {
    /// Renders each slot as the 4-digit lowercase hex of its lower 16 bits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{:04x}", *slot as u16)?;
        }
        Ok(())
    }
}

/// Print-oriented page geometry derived from a document bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageLayout {
    pub(crate) print_info: MacPrintInfo,
    pub(crate) pages_height: u32,
}

impl PageLayout {
    /// Computes the physical page split for a drawing of the given extent.
    ///
    /// Drawings taller than one page keep the single-page height and raise
    /// the page count instead, so readers tile the document vertically.
    pub(crate) fn compute(bounds: &Bounds, bond_length: f64, max_page_height: f64) -> Self {
        // The extra inch on each axis compensates the 36-point print margins.
        let x_inch = bounds.max.x * bond_length / LOGICAL_DPI + 1.0;
        let y_inch = bounds.max.y * bond_length / LOGICAL_DPI + 1.0;

        let width = (x_inch * f64::from(PRINT_DPI)) as i32;
        let mut height = (y_inch * f64::from(PRINT_DPI)) as i32;

        let max_height =
            ((max_page_height * bond_length / LOGICAL_DPI + 1.0) * f64::from(PRINT_DPI)) as i32;

        let mut pages_height = 1;
        if height > max_height {
            pages_height = (f64::from(height) / f64::from(max_height)).ceil() as u32;
            height = max_height;
        }

        PageLayout {
            print_info: MacPrintInfo::new(height, width),
            pages_height,
        }
    }
}
