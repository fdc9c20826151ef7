//! User actions replayed by `form-enhance run`.

use anyhow::{bail, Context, Result};
use form_enhance::{Page, SubmitOutcome};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One user action, addressed by element `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Click(String),
    Fill { id: String, value: String },
    Blur(String),
    Submit(String),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    /// `click:<id>`, `fill:<id>=<value>`, `blur:<id>` or `submit:<id>`.
    fn from_str(s: &str) -> Result<Self> {
        let Some((action, rest)) = s.split_once(':') else {
            bail!("expected <action>:<id>, got {s:?}");
        };
        let step = match action.trim() {
            "click" => Self::Click(element_id(rest)?),
            "blur" => Self::Blur(element_id(rest)?),
            "submit" => Self::Submit(element_id(rest)?),
            "fill" => {
                let Some((id, value)) = rest.split_once('=') else {
                    bail!("fill expects <id>=<value>, got {rest:?}");
                };
                Self::Fill {
                    id: element_id(id)?,
                    value: value.to_string(),
                }
            }
            other => bail!("unknown action {other:?} (expected click, fill, blur or submit)"),
        };
        Ok(step)
    }
}

fn element_id(raw: &str) -> Result<String> {
    let id = raw.trim().trim_start_matches('#');
    if id.is_empty() {
        bail!("missing element id");
    }
    Ok(id.to_string())
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click(id) => write!(f, "click #{id}"),
            Self::Fill { id, value } => write!(f, "fill #{id} = {value:?}"),
            Self::Blur(id) => write!(f, "blur #{id}"),
            Self::Submit(id) => write!(f, "submit #{id}"),
        }
    }
}

/// What a replayed step produced.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub step: String,
    /// Set for submit steps only.
    pub submit: Option<SubmitOutcome>,
}

/// Apply `step` to the page.
pub fn apply(page: &mut Page, step: &Step) -> Result<StepResult> {
    let mut submit = None;
    match step {
        Step::Click(id) => {
            let node = page.document().require_id(id)?;
            page.click(node)?;
        }
        Step::Fill { id, value } => {
            let node = page.document().require_id(id)?;
            page.fill(node, value)?;
        }
        Step::Blur(id) => {
            let node = page.document().require_id(id)?;
            page.blur(node)?;
        }
        Step::Submit(id) => {
            let node = page.document().require_id(id)?;
            submit = Some(page.submit(node)?);
        }
    }
    Ok(StepResult {
        step: step.to_string(),
        submit,
    })
}

/// Apply every step in order, stopping at the first failure.
pub fn apply_all(page: &mut Page, steps: &[Step]) -> Result<Vec<StepResult>> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| apply(page, step).with_context(|| format!("step {} ({step})", i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("click:toggle1".parse::<Step>().unwrap(), Step::Click("toggle1".into()));
        assert_eq!("blur:#email".parse::<Step>().unwrap(), Step::Blur("email".into()));
        assert_eq!(
            "fill:email=ada@example.com".parse::<Step>().unwrap(),
            Step::Fill {
                id: "email".into(),
                value: "ada@example.com".into()
            }
        );
        assert_eq!(
            "fill:note=a=b".parse::<Step>().unwrap(),
            Step::Fill {
                id: "note".into(),
                value: "a=b".into()
            }
        );
        assert_eq!("submit:login".parse::<Step>().unwrap(), Step::Submit("login".into()));
    }

    #[test]
    fn test_parse_rejects_malformed_steps() {
        assert!("click".parse::<Step>().is_err());
        assert!("click:".parse::<Step>().is_err());
        assert!("hover:x".parse::<Step>().is_err());
        assert!("fill:email".parse::<Step>().is_err());
    }

    #[test]
    fn test_apply_all_reports_failing_step() {
        let mut page = Page::parse(r#"<form id="f"><input id="u"></form>"#);
        let steps = vec![
            Step::Fill {
                id: "u".into(),
                value: "x".into(),
            },
            Step::Blur("nope".into()),
        ];
        let err = apply_all(&mut page, &steps).unwrap_err();
        assert!(format!("{err:#}").contains("step 2"));
        assert!(format!("{err:#}").contains("nope"));
    }

    #[test]
    fn test_apply_submit_records_outcome() {
        let mut page = Page::parse(r#"<form id="f"><input id="u"></form>"#);
        let result = apply(&mut page, &Step::Submit("f".into())).unwrap();
        assert_eq!(result.submit, Some(SubmitOutcome::Submitted));
        assert_eq!(result.step, "submit #f");
    }
}
