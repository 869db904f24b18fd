//! The pipeline module chain.
//!
//! Modules are stateless strategies invoked once per property in a fixed,
//! pipeline-wide order. Each inspects the property's annotations and
//! contributes zero or more output nodes; a module with nothing to do
//! returns [`Outcome::Continue`] without side effects, so the whole chain is
//! safe to run unconditionally on every property.

pub mod control;
pub mod help;
pub mod subform;
pub mod title;

pub use control::ControlModule;
pub use help::HelpModule;
pub use subform::SubFormModule;
pub use title::TitleModule;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use crate::builder::{context::BuilderContext, tree::ArrayId};

/// Result of running one module for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Later modules in the chain still run.
    Continue,
    /// Skip the remaining modules for this property.
    Finish,
    /// The property expands into a nested sub-form rooted at the given
    /// array; remaining modules are skipped.
    Descend(ArrayId),
}

/// A unit of the form-builder pipeline.
///
/// Uses `enum_dispatch` for zero-cost dispatch over the fixed module set.
#[enum_dispatch]
pub trait FormModule {
    fn process(&self, ctx: &mut BuilderContext<'_>) -> Result<Outcome>;
}

/// The fixed set of pipeline modules.
#[enum_dispatch(FormModule)]
#[derive(Debug)]
pub enum Module {
    SubForm(SubFormModule),
    Control(ControlModule),
    Title(TitleModule),
    Help(HelpModule),
}

/// The pipeline in its fixed execution order: sub-form expansion first (it
/// ends the chain for expanded properties), then the control definition,
/// then decorations merged into or placed around the element.
pub fn default_pipeline() -> Vec<Module> {
    vec![
        SubFormModule.into(),
        ControlModule.into(),
        TitleModule.into(),
        HelpModule.into(),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        builder::{context::BuilderContext, tree::FormTree},
        language::{Culture, LanguageProvider},
        metadata::DtoType,
    };

    /// Run one module over the first property of `dto` against a fresh tree
    /// and return the rendered document.
    pub fn run_module<M: super::FormModule>(
        module: &M,
        dto: &DtoType,
        full_property_path: &str,
        provider: &dyn LanguageProvider,
    ) -> anyhow::Result<(super::Outcome, Vec<serde_json::Value>)> {
        let culture = Culture::new("en");
        let ancestors = vec![dto.name.clone()];
        let mut tree = FormTree::new();
        let root = tree.root();

        let mut ctx = BuilderContext::new(
            dto,
            &dto.name,
            Some(&dto.properties[0]),
            full_property_path.to_string(),
            &culture,
            &ancestors,
            &mut tree,
            root,
            provider,
        );
        let outcome = module.process(&mut ctx)?;
        drop(ctx);

        Ok((outcome, tree.into_json()))
    }
}
