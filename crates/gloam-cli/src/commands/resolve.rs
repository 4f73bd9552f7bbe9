//! Resolve command implementation
//!
//! Named symbols go straight to the native strategy. `--all` preloads a
//! fresh GL table instead and reports what is missing.

use std::ffi::CString;

use gloam_core::{ResolveError, Result, SymbolSource};
use gloam_gl::Gl;
use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::commands::print_json;

#[derive(Debug, Serialize)]
struct Resolution {
    name: String,
    /// Hex address, absent when not found
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResolveReport {
    strategy: &'static str,
    resolved: usize,
    missing: usize,
    symbols: Vec<Resolution>,
}

pub fn run(args: &ResolveArgs) -> Result<()> {
    let source = gloam_source::shared();

    let symbols = if args.all {
        resolve_all(source)
    } else {
        args.names
            .iter()
            .map(|name| resolve_one(source, name))
            .collect::<Result<Vec<_>>>()?
    };

    let resolved = symbols.iter().filter(|s| s.address.is_some()).count();
    let report = ResolveReport {
        strategy: source.name(),
        resolved,
        missing: symbols.len() - resolved,
        symbols,
    };

    if args.json {
        return print_json(&report);
    }

    for symbol in &report.symbols {
        match &symbol.address {
            Some(address) => println!("{:<40} {address}", symbol.name),
            None => println!("{:<40} not found", symbol.name),
        }
    }
    println!();
    println!(
        "{} resolved, {} missing via {}",
        report.resolved, report.missing, report.strategy
    );
    Ok(())
}

fn resolve_one<S: SymbolSource + ?Sized>(source: &S, name: &str) -> Result<Resolution> {
    let symbol =
        CString::new(name).map_err(|_| ResolveError::InvalidSymbolName(name.to_string()))?;
    let address = source.resolve(&symbol).map(|addr| addr.to_string());
    log::debug!("{name}: {address:?}");
    Ok(Resolution {
        name: name.to_string(),
        address,
    })
}

fn resolve_all<S: SymbolSource>(source: S) -> Vec<Resolution> {
    let gl = Gl::new(source);
    let report = gl.dispatch().preload();
    log::info!("{} of {} entry points missing", report.missing.len(), gl.dispatch().len());

    gl.dispatch()
        .slots()
        .map(|slot| Resolution {
            name: slot.symbol().to_string(),
            address: slot.address().map(|addr| addr.to_string()),
        })
        .collect()
}
