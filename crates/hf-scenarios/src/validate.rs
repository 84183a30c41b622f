//! Definition document validation.

use crate::build::component_from_def;
use crate::schema::{DefinitionDocument, LineDef, SetDef};
use crate::DefinitionResult;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty {what} in {context}")]
    Empty { what: &'static str, context: String },

    #[error("Missing field: {field} for {kind} in {context}")]
    MissingField {
        field: &'static str,
        kind: String,
        context: String,
    },

    #[error("Unexpected field: {field} for {kind} in {context}")]
    UnexpectedField {
        field: &'static str,
        kind: String,
        context: String,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(document: &DefinitionDocument) -> DefinitionResult<()> {
    if document.version == 0 || document.version > crate::schema::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: document.version,
        }
        .into());
    }

    let mut set_ids = HashSet::new();
    for set in &document.sets {
        if !set_ids.insert(set.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: set.id.clone(),
                context: "sets".to_string(),
            }
            .into());
        }
        validate_set(set)?;
    }
    Ok(())
}

fn validate_set(set: &SetDef) -> DefinitionResult<()> {
    if set.id.trim().is_empty() {
        return Err(ValidationError::Empty {
            what: "id",
            context: "sets".to_string(),
        }
        .into());
    }

    for (index, chain) in set.chains.iter().enumerate() {
        let context = format!("{}.chains[{index}]", set.id);
        validate_line(&chain.line, &context)?;
    }
    Ok(())
}

fn validate_line(line: &LineDef, context: &str) -> DefinitionResult<()> {
    if line.components.is_empty() {
        return Err(ValidationError::Empty {
            what: "components",
            context: context.to_string(),
        }
        .into());
    }

    if line.branches.len() == 1 {
        return Err(ValidationError::InvalidValue {
            field: format!("{context}.branches"),
            value: "1 branch".to_string(),
            reason: "a single continuation belongs in components".to_string(),
        }
        .into());
    }

    validate_forced_flow_rate(line.forced_flow_rate, context)?;

    for (index, def) in line.components.iter().enumerate() {
        let context = format!("{context}.components[{index}]");
        validate_forced_flow_rate(def.forced_flow_rate, &context)?;
        component_from_def(def, &context)?;
    }

    for (index, branch) in line.branches.iter().enumerate() {
        validate_line(branch, &format!("{context}.branches[{index}]"))?;
    }
    Ok(())
}

fn validate_forced_flow_rate(flow_rate: Option<f64>, context: &str) -> DefinitionResult<()> {
    match flow_rate {
        Some(flow_rate) if !flow_rate.is_finite() || flow_rate <= 0.0 => {
            Err(ValidationError::InvalidValue {
                field: format!("{context}.forced_flow_rate"),
                value: flow_rate.to_string(),
                reason: "must be a positive flow rate".to_string(),
            }
            .into())
        }
        _ => Ok(()),
    }
}
