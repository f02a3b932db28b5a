use std::fmt::Write as _;

use crate::entities::{GeneInfo, ProteinInfo, SearchResult, SymbolMatches};

/// Renders a search result the way the CLI prints it: a count line, the
/// first page of ids, and the upstream query translation when present.
pub(crate) fn search_result(query: &str, result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} genes matching '{query}':", result.total_count);
    let shown: Vec<&str> = result.ids.iter().take(10).map(String::as_str).collect();
    let _ = writeln!(out, "Gene IDs: {}", shown.join(", "));
    if let Some(translation) = result.query_translation.as_deref() {
        let _ = writeln!(out, "Query translation: {translation}");
    }
    out.trim_end().to_string()
}

pub(crate) fn gene(gene: &GeneInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (ID: {})", gene.name, gene.gene_id);
    let _ = writeln!(out, "Description: {}", gene.description);
    let _ = writeln!(out, "Organism: {}", gene.organism);
    if let Some(chromosome) = gene.chromosome.as_deref() {
        let _ = writeln!(out, "Chromosome: {chromosome}");
    }
    if let Some(map_location) = gene.map_location.as_deref() {
        let _ = writeln!(out, "Map location: {map_location}");
    }
    if let Some(gene_type) = gene.gene_type.as_deref() {
        let _ = writeln!(out, "Gene type: {gene_type}");
    }
    if gene.other_aliases.is_empty() {
        let _ = writeln!(out, "Aliases: none");
    } else {
        let _ = writeln!(out, "Aliases: {}", gene.other_aliases.join(", "));
    }
    if let Some(summary) = gene.summary.as_deref() {
        let _ = writeln!(out, "Summary: {summary}");
    }
    out.trim_end().to_string()
}

pub(crate) fn protein(protein: &ProteinInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (ID: {})", protein.title, protein.protein_id);
    let _ = writeln!(out, "Organism: {}", protein.organism);
    if let Some(length) = protein.length {
        let _ = writeln!(out, "Length: {length} aa");
    }
    if let Some(mol_type) = protein.mol_type.as_deref() {
        let _ = writeln!(out, "Molecule type: {mol_type}");
    }
    out.trim_end().to_string()
}

pub(crate) fn symbol_matches(symbol: &str, organism: Option<&str>, matches: &SymbolMatches) -> String {
    let mut out = String::new();
    if matches.genes.is_empty() {
        let _ = write!(out, "No genes found for symbol '{symbol}'");
    } else {
        let _ = write!(
            out,
            "Found {} gene(s) for symbol '{symbol}'",
            matches.genes.len()
        );
    }
    if let Some(organism) = organism {
        let _ = write!(out, " in organism '{organism}'");
    }
    let _ = writeln!(out);

    for (i, gene) in matches.genes.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {} (ID: {})", i + 1, gene.name, gene.gene_id);
        let _ = writeln!(out, "   Description: {}", gene.description);
        let _ = writeln!(out, "   Organism: {}", gene.organism);
        if let Some(chromosome) = gene.chromosome.as_deref() {
            let _ = writeln!(out, "   Chromosome: {chromosome}");
        }
    }

    if !matches.skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Skipped {} id(s) that failed to resolve: {}",
            matches.skipped.len(),
            matches.skipped.join(", ")
        );
    }
    out.trim_end().to_string()
}
