//! Conversion between definition documents and chain graphs.

use hf_chain::{Chain, ChainLink, ConfigurationLibrary, ConfigurationSet, Description};
use hf_components::catalog::hose_friction_table;
use hf_components::{
    Component, ComponentKind, Elevation, Hose, IntermediateAppliance, Nozzle, SectionStart,
};
use hf_core::{HfError, HfResult};

use crate::schema::{ChainDef, ComponentDef, DefinitionDocument, LineDef, SetDef};
use crate::validate::{ValidationError, validate_document};
use crate::{DefinitionError, DefinitionResult};

/// Build one component, resolving everything that can be checked without a graph:
/// the kind name, required fields, nozzle flow rate and hose friction table.
pub fn component_from_def(def: &ComponentDef, context: &str) -> DefinitionResult<Component> {
    let wrap = |source: HfError| DefinitionError::Component {
        context: context.to_string(),
        source,
    };
    let kind = def.kind.parse::<ComponentKind>().map_err(wrap)?;
    let missing = |field: &'static str| ValidationError::MissingField {
        field,
        kind: kind.to_string(),
        context: context.to_string(),
    };
    if let Some(field) = stray_field(def, kind) {
        return Err(ValidationError::UnexpectedField {
            field,
            kind: kind.to_string(),
            context: context.to_string(),
        }
        .into());
    }

    let component = match kind {
        ComponentKind::Nozzle => {
            let nozzle = Nozzle {
                kind: def.nozzle.ok_or_else(|| missing("nozzle"))?,
                diameter: def.diameter,
                identifier: def.identifier.clone(),
            };
            nozzle.flow_rate().map_err(wrap)?;
            Component::Nozzle(nozzle)
        }
        ComponentKind::Hose => {
            let diameter = def.diameter.ok_or_else(|| missing("diameter"))?;
            let length = def.length.ok_or_else(|| missing("length"))?;
            hose_friction_table(diameter).map_err(wrap)?;
            Component::Hose(Hose::new(diameter, length))
        }
        ComponentKind::IntermediateAppliance => {
            let appliance = def.appliance.ok_or_else(|| missing("appliance"))?;
            Component::IntermediateAppliance(IntermediateAppliance::new(appliance))
        }
        ComponentKind::Elevation => {
            let floor_count = def.floor_count.ok_or_else(|| missing("floor_count"))?;
            Component::Elevation(Elevation::new(floor_count))
        }
        ComponentKind::SectionStart => {
            let label = def.label.clone().ok_or_else(|| missing("label"))?;
            Component::SectionStart(SectionStart::new(label))
        }
    };
    Ok(component)
}

/// First variant-specific field set on `def` that `kind` has no use for.
fn stray_field(def: &ComponentDef, kind: ComponentKind) -> Option<&'static str> {
    let allowed: &[&str] = match kind {
        ComponentKind::Nozzle => &["nozzle", "diameter", "identifier"],
        ComponentKind::Hose => &["diameter", "length"],
        ComponentKind::IntermediateAppliance => &["appliance"],
        ComponentKind::Elevation => &["floor_count"],
        ComponentKind::SectionStart => &["label"],
    };
    [
        ("nozzle", def.nozzle.is_some()),
        ("appliance", def.appliance.is_some()),
        ("diameter", def.diameter.is_some()),
        ("identifier", def.identifier.is_some()),
        ("length", def.length.is_some()),
        ("floor_count", def.floor_count.is_some()),
        ("label", def.label.is_some()),
    ]
    .into_iter()
    .find(|&(field, present)| present && !allowed.contains(&field))
    .map(|(field, _)| field)
}

fn build_line(line: &LineDef, context: &str) -> DefinitionResult<ChainLink> {
    let components = line
        .components
        .iter()
        .enumerate()
        .map(|(index, def)| component_from_def(def, &format!("{context}.components[{index}]")))
        .collect::<DefinitionResult<Vec<_>>>()?;
    let branches = line
        .branches
        .iter()
        .enumerate()
        .map(|(index, branch)| build_line(branch, &format!("{context}.branches[{index}]")))
        .collect::<DefinitionResult<Vec<_>>>()?;

    let mut pending = Some(branches);
    let root = components
        .into_iter()
        .zip(&line.components)
        .rev()
        .fold(None, |next, (component, def)| {
            let mut link = ChainLink::new(component);
            if let Some(flow_rate) = def.forced_flow_rate.or(line.forced_flow_rate) {
                link = link.with_forced_flow_rate(flow_rate);
            }
            Some(match next {
                Some(next) => link.then(next),
                None => link.branch(pending.take().unwrap_or_default()),
            })
        });
    root.ok_or_else(|| {
        ValidationError::Empty {
            what: "components",
            context: context.to_string(),
        }
        .into()
    })
}

fn build_chain(def: &ChainDef, context: &str) -> DefinitionResult<Chain> {
    let chain = Chain::templated(def.description.clone(), build_line(&def.line, context)?);
    // Surface template mistakes at load time rather than when first displayed.
    chain
        .description()
        .map_err(|source| DefinitionError::Component {
            context: format!("{context}.description"),
            source,
        })?;
    Ok(chain)
}

pub fn build_set(def: &SetDef) -> DefinitionResult<ConfigurationSet> {
    let chains = def
        .chains
        .iter()
        .enumerate()
        .map(|(index, chain)| build_chain(chain, &format!("{}.chains[{index}]", def.id)))
        .collect::<DefinitionResult<Vec<_>>>()?;
    Ok(ConfigurationSet::new(
        def.id.clone(),
        def.description.clone(),
        chains,
    ))
}

/// Validate `document`, then build every set in order.
pub fn build_library(document: &DefinitionDocument) -> DefinitionResult<ConfigurationLibrary> {
    validate_document(document)?;
    let library = document
        .sets
        .iter()
        .map(build_set)
        .collect::<DefinitionResult<ConfigurationLibrary>>()?;
    tracing::debug!(sets = library.len(), "built configuration library");
    Ok(library)
}

pub fn component_to_def(component: &Component) -> ComponentDef {
    let kind = component.kind().to_string();
    match component {
        Component::Nozzle(n) => ComponentDef {
            kind,
            nozzle: Some(n.kind),
            diameter: n.diameter,
            identifier: n.identifier.clone(),
            ..ComponentDef::default()
        },
        Component::Hose(h) => ComponentDef {
            kind,
            diameter: Some(h.diameter),
            length: Some(h.length),
            ..ComponentDef::default()
        },
        Component::IntermediateAppliance(a) => ComponentDef {
            kind,
            appliance: Some(a.kind),
            ..ComponentDef::default()
        },
        Component::Elevation(e) => ComponentDef {
            kind,
            floor_count: Some(e.floor_count),
            ..ComponentDef::default()
        },
        Component::SectionStart(s) => ComponentDef {
            kind,
            label: Some(s.label.clone()),
            ..ComponentDef::default()
        },
    }
}

/// Straight run from `link` up to its first branch or line end.
///
/// A forced flow rate shared by the whole run is written once on the line;
/// otherwise each link keeps its own on its component.
pub fn line_to_def(link: &ChainLink) -> LineDef {
    let mut run = vec![link];
    let mut current = link;
    while let [only] = current.children() {
        run.push(only);
        current = only;
    }

    let shared = run
        .iter()
        .all(|l| l.forced_flow_rate() == link.forced_flow_rate());
    let components = run
        .iter()
        .map(|l| ComponentDef {
            forced_flow_rate: if shared { None } else { l.forced_flow_rate() },
            ..component_to_def(l.component())
        })
        .collect();
    LineDef {
        forced_flow_rate: if shared { link.forced_flow_rate() } else { None },
        components,
        branches: current.children().iter().map(line_to_def).collect(),
    }
}

fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// Computed descriptions are evaluated and stored as literal text.
pub fn chain_to_def(chain: &Chain) -> HfResult<ChainDef> {
    let description = match chain.description_source() {
        Description::Template(template) => template.clone(),
        Description::Literal(text) => escape_braces(text),
        Description::Computed(_) => escape_braces(&chain.description()?),
    };
    Ok(ChainDef {
        description,
        line: line_to_def(chain.root()),
    })
}

pub fn set_to_def(set: &ConfigurationSet) -> HfResult<SetDef> {
    Ok(SetDef {
        id: set.id().to_string(),
        description: set.description().to_string(),
        chains: set.iter().map(chain_to_def).collect::<HfResult<_>>()?,
    })
}

pub fn library_to_document<'a>(
    sets: impl IntoIterator<Item = &'a ConfigurationSet>,
) -> HfResult<DefinitionDocument> {
    Ok(DefinitionDocument {
        version: crate::schema::LATEST_VERSION,
        sets: sets.into_iter().map(set_to_def).collect::<HfResult<_>>()?,
    })
}
