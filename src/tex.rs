//! TeX rendering for generated cards.
//!
//! Emits a standalone LaTeX document drawing each card as a grid of square
//! tikz nodes, one card per page. The grid technique follows
//! <https://tex.stackexchange.com/questions/49746/a-table-with-square-cells>.
//!
//! Entry text is passed through verbatim. Entries may contain their own TeX
//! (math mode included); nothing is escaped here.

use crate::{Card, CardSpec};
use std::io::{self, Write};

/// Writes the complete TeX document for a batch of cards.
///
/// The preamble encodes the column count of the spec, so every card in the
/// batch must share the spec it was generated under.
pub fn render_document<W: Write>(out: &mut W, spec: &CardSpec, cards: &[Card]) -> io::Result<()> {
    write_preamble(out, spec.cols)?;
    for card in cards {
        write_card(out, spec, card)?;
    }
    writeln!(out, r"\end{{center}}")?;
    write!(out, r"\end{{document}}")?;
    Ok(())
}

fn write_preamble<W: Write>(out: &mut W, cols: usize) -> io::Result<()> {
    writeln!(out, r"\documentclass{{article}}")?;
    writeln!(out, r"\usepackage[margin=0.25in]{{geometry}}")?;
    writeln!(out, r"\usepackage{{tikz}}")?;
    writeln!(out, r"\usetikzlibrary{{calc}}")?;
    writeln!(out)?;
    writeln!(out, r"\pagenumbering{{gobble}}")?;
    writeln!(out)?;
    writeln!(out, r"\newcommand{{\Size}}{{3.5cm}}")?;
    writeln!(out)?;

    // One-based column numbers, unpacked per row by the \foreach below.
    let sequence: Vec<String> = (1..=cols).map(|c| c.to_string()).collect();
    writeln!(out, r"\def\Sequence{{{}}}", sequence.join(", "))?;
    writeln!(out)?;

    writeln!(out, r"\tikzset{{Square/.style={{")?;
    writeln!(out, r"    inner sep=0pt,")?;
    writeln!(out, r"    text width=0.9*\Size,")?;
    writeln!(out, r"    minimum size=\Size,")?;
    writeln!(out, r"    line width=1pt,")?;
    writeln!(out, r"    draw=black,")?;
    writeln!(out, r"    align=center")?;
    writeln!(out, r"    }},")?;
    writeln!(out, r"    font={{\fontsize{{13pt}}{{16}}\selectfont}}")?;
    writeln!(out, r"}}")?;
    writeln!(out)?;

    writeln!(out, r"\begin{{document}}")?;
    writeln!(out, r"\begin{{center}}")?;
    Ok(())
}

fn write_card<W: Write>(out: &mut W, spec: &CardSpec, card: &Card) -> io::Result<()> {
    // The title is set bold, though it will not compile as bold if it
    // contains math mode. Same for the free space text below.
    writeln!(
        out,
        r"\vspace*{{\fill}}{{\huge\textbf{{{}}}}} \\ \vspace{{1.5em}}",
        spec.title
    )?;
    writeln!(out)?;
    writeln!(out, r"\begin{{tikzpicture}}[draw=black, x=\Size,y=\Size]")?;
    writeln!(out, r"\foreach \col in \Sequence {{")?;

    let free_index = spec.free_space_index();
    for r in 0..card.rows() {
        let row: Vec<String> = (0..card.cols())
            .map(|c| {
                let slot = card.get(r, c);
                if free_index == Some(r * card.cols() + c) {
                    format!("\"\\textbf{{{slot}}}\"")
                } else {
                    format!("\"{slot}\"")
                }
            })
            .collect();
        writeln!(out, r"\def\row{{{{{}}}}}", row.join(", "))?;
        writeln!(
            out,
            r"\node [Square] at ($(\col,-{})-(0.5,0.5)$) {{\pgfmathparse{{\row[\col-1]}}\pgfmathresult}};",
            r + 1
        )?;
    }

    writeln!(out, r"}}")?;
    writeln!(out, "\\end{{tikzpicture}}\\vspace*{{\\fill}}\\newpage")?;
    writeln!(out)?;
    Ok(())
}
