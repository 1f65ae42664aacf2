use crate::io::config::{ConfigError, ExportConfig};
use crate::io::print::PageLayout;
use crate::models::atom::Radical;
use crate::models::bond::{BondDirection, BondOrder, CisTransParity};
use crate::models::geometry::Bounds;
use crate::models::graph::MoleculeView;
use nalgebra::{Point2, Vector2};
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::mem;
use thiserror::Error;
use tracing::{debug, instrument};

const ELEM_CARBON: u8 = 6;
const LINE_HEIGHT_POINTS: f64 = 12.75;

#[derive(Debug, Error)]
pub enum CdxmlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Unsupported molecule feature: {0}")]
    Unsupported(#[from] UnsupportedFeature),
}

#[derive(Debug, Error)]
pub enum UnsupportedFeature {
    #[error("R-group attachment site at atom {atom}")]
    RSite { atom: usize },
    #[error("Pseudoatom at atom {atom}")]
    Pseudoatom { atom: usize },
    #[error("{kind:?} radical at atom {atom}")]
    Radical { atom: usize, kind: Radical },
}

/// Horizontal alignment of a standalone text annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justification {
    Left,
    /// Centered on the anchor point (the format default).
    #[default]
    Center,
    Right,
}

impl Justification {
    fn as_str(self) -> &'static str {
        match self {
            Justification::Left => "Left",
            Justification::Center => "Center",
            Justification::Right => "Right",
        }
    }
}

/// Fixed 6-decimal rendering for coordinate attributes.
///
/// Keeps the emitted text independent of locale settings and of float
/// shortest-representation rules, so identical inputs always produce
/// identical bytes.
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Shifts a neighbour slot to its 1-based output form, with 0 marking a
/// vacant slot.
fn one_based(slot: Option<usize>) -> usize {
    match slot {
        Some(index) => index + 1,
        None => 0,
    }
}

fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| matches!(b, b'&' | b'<' | b'>')) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Streaming encoder producing CDXML documents from molecular graphs.
///
/// Markup is written to the underlying sink as each call executes; the
/// document is never buffered, so arbitrarily large structures stream in
/// constant memory. Callers either drive the full sequence
/// ([`begin_document`](Self::begin_document) →
/// [`begin_page`](Self::begin_page) → [`save_fragment`](Self::save_fragment)
/// → [`end_page`](Self::end_page) → [`end_document`](Self::end_document)) or
/// hand a whole molecule to [`save_molecule`](Self::save_molecule).
///
/// One saver serves one encode session. After an error the stream holds
/// partial markup and the session should be discarded; the saver never
/// attempts cleanup writes.
pub struct CdxmlSaver<W: Write> {
    output: W,
    bond_length: f64,
    max_page_height: f64,
    pages_height: u32,
}

impl<W: Write> CdxmlSaver<W> {
    /// Creates a saver with the standard drawing settings (bond length 30,
    /// page height 64 bond lengths).
    pub fn new(output: W) -> Self {
        let defaults = ExportConfig::default();
        Self {
            output,
            bond_length: defaults.bond_length,
            max_page_height: defaults.max_page_height,
            pages_height: 1,
        }
    }

    /// Creates a saver with explicit drawing settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_config(output: W, config: &ExportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            output,
            bond_length: config.bond_length,
            max_page_height: config.max_page_height,
            pages_height: 1,
        })
    }

    /// Returns the page height in bond-length units.
    pub fn page_height(&self) -> f64 {
        self.max_page_height
    }

    /// Returns the line spacing for multi-line annotations, in bond-length
    /// units.
    pub fn text_line_height(&self) -> f64 {
        LINE_HEIGHT_POINTS / self.bond_length
    }

    /// Consumes the saver and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.output
    }

    /// Writes the XML prolog and the opening document tag.
    ///
    /// # Arguments
    ///
    /// * `bounds` - The overall drawing extent in graph coordinates. When
    ///   given, the header carries print margins and a packed print record,
    ///   and drawings taller than one page raise the vertical page count
    ///   reported by [`begin_page`](Self::begin_page). Without it the
    ///   document stays a single page with no print metadata. Coordinates
    ///   are assumed finite (see [`Bounds::is_finite`]); no further
    ///   validation is performed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn begin_document(&mut self, bounds: Option<&Bounds>) -> Result<(), CdxmlError> {
        writeln!(self.output, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(
            self.output,
            "<!DOCTYPE CDXML SYSTEM \"http://www.cambridgesoft.com/xml/cdxml.dtd\" >"
        )?;

        write!(self.output, "<CDXML BondLength=\"{}\"", Coord(self.bond_length))?;
        if let Some(bounds) = bounds {
            let layout = PageLayout::compute(bounds, self.bond_length, self.max_page_height);
            self.pages_height = layout.pages_height;

            writeln!(self.output, " PrintMargins=\"36 36 36 36\"")?;
            writeln!(self.output, " MacPrintInfo=\"{}\"", layout.print_info)?;
        }
        writeln!(self.output, ">")?;
        Ok(())
    }

    /// Opens a page block reporting the vertical page count computed by
    /// [`begin_document`](Self::begin_document). Documents grow downwards
    /// only, so the horizontal count is always one page.
    ///
    /// The `bounds` argument mirrors the document call and is currently
    /// unused.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn begin_page(&mut self, _bounds: Option<&Bounds>) -> Result<(), CdxmlError> {
        writeln!(
            self.output,
            "<page HeightPages=\"{}\" WidthPages=\"1\">",
            self.pages_height
        )?;
        Ok(())
    }

    /// Encodes one molecule as a fragment block inside the current page.
    ///
    /// Atoms are emitted in index order with 1-based ids, then bonds with
    /// 1-based atom references. Positions are translated by `offset` and
    /// scaled by `structure_scale` times the bond length, with the vertical
    /// axis negated for the format's downward y convention. Graphs without
    /// explicit coordinates fall back to topological stereo descriptors on
    /// atoms and bonds instead of positions and wedges.
    ///
    /// # Arguments
    ///
    /// * `mol` - The graph to encode.
    /// * `offset` - Translation applied to every atom position, in graph
    ///   coordinates.
    /// * `structure_scale` - Extra scale factor on top of the bond length.
    ///
    /// # Errors
    ///
    /// Returns an error if the molecule uses an unsupported feature (R-group
    /// attachment sites, pseudoatoms, radicals beyond doublet and singlet)
    /// or if writing to the output fails. The stream keeps whatever markup
    /// was produced before the failure.
    #[instrument(
        skip_all,
        name = "cdxml_fragment",
        fields(atoms = mol.atom_count(), bonds = mol.bond_count())
    )]
    pub fn save_fragment(
        &mut self,
        mol: &impl MoleculeView,
        offset: Vector2<f64>,
        structure_scale: f64,
    ) -> Result<(), CdxmlError> {
        let scale = structure_scale * self.bond_length;
        let has_coords = mol.has_coordinates();

        writeln!(self.output, "<fragment>")?;

        let mut extent: Option<Bounds> = None;

        for atom in 0..mol.atom_count() {
            if mol.is_r_site(atom) {
                return Err(UnsupportedFeature::RSite { atom }.into());
            }
            if mol.is_pseudoatom(atom) {
                return Err(UnsupportedFeature::Pseudoatom { atom }.into());
            }

            let element = mol.atomic_number(atom);
            write!(
                self.output,
                "    <n id=\"{}\" Element=\"{}\"",
                atom + 1,
                element
            )?;

            let isotope = mol.isotope(atom);
            if isotope != 0 {
                write!(self.output, " Isotope=\"{isotope}\"")?;
            }

            let charge = mol.formal_charge(atom);
            if charge != 0 {
                write!(self.output, " Charge=\"{charge}\"")?;
            }

            let radical = mol.radical(atom);
            if radical != Radical::None {
                let radical_str = match radical {
                    Radical::Doublet => "Doublet",
                    Radical::Singlet => "Singlet",
                    kind => return Err(UnsupportedFeature::Radical { atom, kind }.into()),
                };
                write!(self.output, " Radical=\"{radical_str}\"")?;
            }

            if mol.should_write_hydrogen_count(atom) {
                match mol.total_hydrogens(atom) {
                    Some(hydrogens) => write!(self.output, " NumHydrogens=\"{hydrogens}\"")?,
                    None => debug!(atom, "Hydrogen count unavailable; omitting the attribute."),
                }
            }

            let raw = mol.position(atom);
            let pos = Point2::new(raw.x, raw.y) + offset;
            extent = Some(match extent {
                Some(bounds) => bounds.include(pos),
                None => Bounds::around(pos),
            });

            let scaled = pos * scale;
            if has_coords {
                write!(
                    self.output,
                    "\n         p=\"{} {}\"",
                    Coord(scaled.x),
                    Coord(-scaled.y)
                )?;
            } else if let Some(center) = mol.stereocenter(atom) {
                if center.is_definite() {
                    write!(self.output, " Geometry=\"Tetrahedral\"")?;
                    let [p0, p1, p2, p3] = center.pyramid;
                    write!(
                        self.output,
                        " BondOrdering=\"{} {} {} {}\"",
                        one_based(p0),
                        one_based(p1),
                        one_based(p2),
                        one_based(p3)
                    )?;
                }
            }

            if mol.degree(atom) == 0
                && element == ELEM_CARBON
                && charge == 0
                && radical == Radical::None
            {
                // explicit text label for the lone carbon
                writeln!(self.output, ">")?;
                writeln!(
                    self.output,
                    "<t p=\"{} {}\" Justification=\"Center\"><s font=\"3\" size=\"10\" face=\"96\">CH4</s></t>",
                    Coord(scaled.x),
                    Coord(-scaled.y)
                )?;
                writeln!(self.output, "</n>")?;
            } else {
                writeln!(self.output, "/>")?;
            }
        }

        for bond in 0..mol.bond_count() {
            write!(
                self.output,
                "    <b B=\"{}\" E=\"{}\"",
                mol.bond_begin(bond) + 1,
                mol.bond_end(bond) + 1
            )?;

            match mol.bond_order(bond) {
                // single is the format default and stays implicit
                BondOrder::Single => {}
                order => write!(self.output, " Order=\"{}\"", order.as_f64())?,
            }

            let direction = mol.bond_direction(bond);
            if has_coords && matches!(direction, BondDirection::Up | BondDirection::Down) {
                let display = if direction == BondDirection::Up {
                    "WedgeBegin"
                } else {
                    "WedgedHashBegin"
                };
                write!(self.output, " Display=\"{display}\"")?;
            } else if !has_coords {
                if let Some(cis_trans) = mol.cis_trans(bond) {
                    let [s0, s1, s2, s3] = cis_trans.substituents;
                    let mut third = one_based(s2);
                    let mut fourth = one_based(s3);
                    if cis_trans.parity == CisTransParity::Trans {
                        mem::swap(&mut third, &mut fourth);
                    }
                    write!(
                        self.output,
                        " BondCircularOrdering=\"{} {} {} {}\"",
                        one_based(s0),
                        one_based(s1),
                        third,
                        fourth
                    )?;
                }
            }

            writeln!(self.output, "/>")?;
        }

        if mol.is_chiral() {
            let anchor = match extent {
                Some(bounds) => bounds.max,
                None => Point2::origin(),
            };
            let corner = Point2::new(scale * anchor.x, -scale * anchor.y);
            writeln!(
                self.output,
                "<graphic BoundingBox=\"{} {} {} {}\" GraphicType=\"Symbol\" SymbolType=\"Absolute\" FrameType=\"None\">",
                Coord(corner.x),
                Coord(corner.y),
                Coord(corner.x),
                Coord(corner.y)
            )?;
            self.add_text(anchor, "Chiral")?;
            writeln!(self.output, "</graphic>")?;
        }

        writeln!(self.output, "</fragment>")?;
        Ok(())
    }

    /// Writes a centered standalone text annotation at `pos` (in bond-length
    /// units).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn add_text(&mut self, pos: Point2<f64>, text: &str) -> Result<(), CdxmlError> {
        self.add_text_aligned(pos, text, Justification::Center)
    }

    /// Writes a standalone text annotation with explicit alignment. Markup
    /// characters in `text` are escaped.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn add_text_aligned(
        &mut self,
        pos: Point2<f64>,
        text: &str,
        alignment: Justification,
    ) -> Result<(), CdxmlError> {
        writeln!(
            self.output,
            "<t p=\"{} {}\" Justification=\"{}\"><s>{}</s></t>",
            Coord(self.bond_length * pos.x),
            Coord(-self.bond_length * pos.y),
            alignment.as_str(),
            escape_text(text)
        )?;
        Ok(())
    }

    /// Closes the current page block.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn end_page(&mut self) -> Result<(), CdxmlError> {
        writeln!(self.output, "</page>")?;
        Ok(())
    }

    /// Closes the document.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn end_document(&mut self) -> Result<(), CdxmlError> {
        writeln!(self.output, "</CDXML>")?;
        Ok(())
    }

    /// Encodes a whole molecule as a single-fragment, single-page document.
    ///
    /// With explicit coordinates the drawing is shifted so the structure
    /// (plus a one-bond margin on every side) starts at the page origin.
    /// Multi-fragment layouts and print metadata are only reachable through
    /// the explicit call sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the molecule uses an unsupported feature or if
    /// writing to the output fails.
    #[instrument(skip_all, name = "cdxml_document")]
    pub fn save_molecule(&mut self, mol: &impl MoleculeView) -> Result<(), CdxmlError> {
        let bounds = if mol.has_coordinates() {
            Bounds::of_points((0..mol.atom_count()).map(|atom| {
                let pos = mol.position(atom);
                Point2::new(pos.x, pos.y)
            }))
            .unwrap_or_else(|| Bounds::around(Point2::origin()))
            .expand(1.0)
        } else {
            Bounds::around(Point2::origin())
        };

        self.begin_document(None)?;
        self.begin_page(None)?;

        let offset = Vector2::new(-bounds.min.x, -bounds.max.y);
        self.save_fragment(mol, offset, 1.0)?;

        self.end_page()?;
        self.end_document()
    }
}
