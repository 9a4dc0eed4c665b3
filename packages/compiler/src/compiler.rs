//! View Compiler
//!
//! The compile-pass facade: owns the catalog, attribute registry, resolution
//! service, and emission binding, and runs the element factory over parsed
//! input.

use std::sync::Arc;

use crate::attributes::AttributeRegistry;
use crate::config::ViewConfig;
use crate::elements::{CodeEmitter, CompiledView, ElementFactory, FactoryContext, TreeSerializer};
use crate::markup::ParsedNode;
use crate::parse_util::CompileError;
use crate::view_component::{ComponentProvider, UnconfiguredProvider};

pub struct ViewCompiler {
    config: ViewConfig,
    registry: AttributeRegistry,
    provider: Arc<dyn ComponentProvider>,
    emitter: Arc<dyn CodeEmitter>,
}

impl ViewCompiler {
    /// Compiler with the built-in attribute rules, the structural emitter,
    /// and no resolution service.
    pub fn new(config: ViewConfig) -> Self {
        ViewCompiler {
            config,
            registry: AttributeRegistry::new(),
            provider: Arc::new(UnconfiguredProvider),
            emitter: Arc::new(TreeSerializer::new()),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn ComponentProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_emitter(mut self, emitter: Arc<dyn CodeEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn with_registry(mut self, registry: AttributeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ViewConfig {
        &mut self.config
    }

    /// Run one compilation pass over a parsed tree.
    pub fn compile(&self, nodes: &[ParsedNode]) -> Result<CompiledView, CompileError> {
        let context = FactoryContext {
            emitter: Arc::clone(&self.emitter),
        };
        let factory = ElementFactory::new(
            &self.config,
            self.provider.as_ref(),
            &self.registry,
            context,
        );
        factory.build(nodes)
    }

    /// Compile and hand the tree straight to the emission stage.
    pub fn compile_to_string(&self, nodes: &[ParsedNode]) -> Result<String, CompileError> {
        Ok(self.compile(nodes)?.emit())
    }
}
