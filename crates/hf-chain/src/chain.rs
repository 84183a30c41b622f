//! Named chains: a root link plus a description that can quote computed values.

use hf_components::{DeliveryComponent, elevation_text};
use hf_core::{HfError, HfResult, Real};

use crate::link::ChainLink;
use crate::transform::ComponentTransform;
use crate::walkthrough::{WalkthroughStep, walkthrough};

/// How a chain describes itself.
///
/// Descriptions are evaluated on demand against the finished chain, so a
/// duplicated chain with a different tail hose reads differently from its
/// source even though both share the same description value.
#[derive(Debug, Clone)]
pub enum Description {
    /// Fixed text.
    Literal(String),
    /// Text with placeholders: `{elevation}`, `{tail_hose:<diameter>}`,
    /// `{flow_rate}`, `{pressure}`. `{{` and `}}` are literal braces.
    Template(String),
    /// Arbitrary pure function of the chain.
    Computed(fn(&Chain) -> HfResult<String>),
}

impl From<&str> for Description {
    fn from(s: &str) -> Self {
        Description::Literal(s.to_string())
    }
}

impl From<String> for Description {
    fn from(s: String) -> Self {
        Description::Literal(s)
    }
}

#[derive(Debug)]
pub struct Chain {
    description: Description,
    root: ChainLink,
}

impl Chain {
    pub fn new(description: impl Into<Description>, root: ChainLink) -> Self {
        Self {
            description: description.into(),
            root,
        }
    }

    /// Chain whose description is a placeholder template.
    pub fn templated(template: impl Into<String>, root: ChainLink) -> Self {
        Self::new(Description::Template(template.into()), root)
    }

    pub fn root(&self) -> &ChainLink {
        &self.root
    }

    pub fn description_source(&self) -> &Description {
        &self.description
    }

    pub fn description(&self) -> HfResult<String> {
        match &self.description {
            Description::Literal(text) => Ok(text.clone()),
            Description::Template(template) => render_template(template, self),
            Description::Computed(f) => f(self),
        }
    }

    pub fn flow_rate(&self) -> HfResult<Real> {
        self.root.flow_rate()
    }

    pub fn total_needed_pressure(&self) -> HfResult<Real> {
        self.root.total_needed_pressure()
    }

    /// Floor count of the chain's end point (0 when no elevation is given).
    pub fn elevation(&self) -> HfResult<i32> {
        self.root.downstream_elevation()
    }

    pub fn elevation_text(&self) -> HfResult<String> {
        elevation_text(self.elevation()?)
    }

    /// Description of the supply-side hose of `diameter`, e.g. `350' of 3" hose`.
    pub fn tail_hose_text(&self, diameter: Real) -> HfResult<String> {
        self.root
            .find_tail_hose(diameter)
            .map(DeliveryComponent::description)
            .ok_or(HfError::TailHoseNotFound { diameter })
    }

    pub fn all_chain_links(&self) -> Vec<&ChainLink> {
        self.root.all_chain_links_from_here()
    }

    pub fn walkthrough(&self) -> HfResult<Vec<WalkthroughStep<'_>>> {
        walkthrough(&self.root)
    }

    /// New chain over a duplicated graph, keeping the same description.
    pub fn duplicate(&self, transform: &mut dyn ComponentTransform) -> Chain {
        Chain {
            description: self.description.clone(),
            root: self.root.duplicate(transform),
        }
    }
}

/// Render a whole number without a decimal point, otherwise to two places.
pub fn format_quantity(value: Real) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn render_template(template: &str, chain: &Chain) -> HfResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            return Err(HfError::InvalidArg {
                what: "unmatched '}' in description template",
            });
        } else {
            let end = tail.find('}').ok_or(HfError::InvalidArg {
                what: "unterminated placeholder in description template",
            })?;
            out.push_str(&expand_placeholder(&tail[1..end], chain)?);
            rest = &tail[end + 1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn expand_placeholder(placeholder: &str, chain: &Chain) -> HfResult<String> {
    let (name, arg) = match placeholder.split_once(':') {
        Some((name, arg)) => (name.trim(), Some(arg.trim())),
        None => (placeholder.trim(), None),
    };

    match (name, arg) {
        ("elevation", None) => chain.elevation_text(),
        ("flow_rate", None) => chain.flow_rate().map(format_quantity),
        ("pressure", None) => chain.total_needed_pressure().map(format_quantity),
        ("tail_hose", Some(diameter)) => {
            let diameter: Real = diameter.parse().map_err(|_| HfError::InvalidArg {
                what: "tail_hose placeholder needs a numeric diameter",
            })?;
            chain.tail_hose_text(diameter)
        }
        _ => Err(HfError::InvalidArg {
            what: "unknown description placeholder",
        }),
    }
}
