use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use log::info;
use modelspec_taxa::{TaxaError, TaxaProvider};

use crate::models::{Model, ModelSpec};

use super::class::{resolve_class, ResolvedClass, UnresolvedConcept};

/// Outcome of resolving a model spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub model: Model,
    /// Every skipped concept spec, in class order then spec order
    pub unresolved: Vec<UnresolvedConcept>,
}

type UnresolvedHook = Box<dyn Fn(&UnresolvedConcept) + Send + Sync>;

/// Resolves model specs against a taxonomy provider.
///
/// Classes are independent of each other, so up to `max_concurrency` of them
/// are resolved at once. Results are always collected in spec order. The
/// first fatal provider error aborts the run.
///
/// ```ignore
/// let resolver = ModelResolver::new(provider)
///     .with_max_concurrency(1)
///     .on_unresolved(|u| println!("{}", u));
/// let resolution = resolver.resolve(&spec).await?;
/// ```
pub struct ModelResolver {
    provider: Arc<dyn TaxaProvider>,
    max_concurrency: usize,
    on_unresolved: Option<UnresolvedHook>,
}

impl ModelResolver {
    /// Create a resolver using the provider's declared concurrency limit.
    pub fn new(provider: Arc<dyn TaxaProvider>) -> Self {
        let max_concurrency = provider.limits().max_concurrency.max(1);
        Self {
            provider,
            max_concurrency,
            on_unresolved: None,
        }
    }

    /// Bound the number of classes resolved concurrently. 1 is sequential.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Report each unresolved concept spec as soon as its class finishes.
    ///
    /// Notices are delivered in spec order. Classes finished before a fatal
    /// error are still reported, even though `resolve` then returns the error.
    pub fn on_unresolved(
        mut self,
        hook: impl Fn(&UnresolvedConcept) + Send + Sync + 'static,
    ) -> Self {
        self.on_unresolved = Some(Box::new(hook));
        self
    }

    pub async fn resolve(&self, spec: &ModelSpec) -> Result<Resolution, TaxaError> {
        info!(
            "Resolving model \"{}\" ({} classes) with {}",
            spec.name,
            spec.classes.len(),
            self.provider.id()
        );

        let provider = self.provider.as_ref();
        let resolved: Vec<ResolvedClass> = stream::iter(&spec.classes)
            .map(|class_spec| resolve_class(provider, class_spec))
            .buffered(self.max_concurrency)
            .inspect_ok(|resolved| {
                if let Some(hook) = &self.on_unresolved {
                    for unresolved in &resolved.unresolved {
                        hook(unresolved);
                    }
                }
            })
            .try_collect()
            .await?;

        let mut classes = Vec::with_capacity(resolved.len());
        let mut unresolved = Vec::new();
        for item in resolved {
            classes.push(item.class);
            unresolved.extend(item.unresolved);
        }

        let concept_count: usize = classes.iter().map(|c| c.concepts.len()).sum();
        info!(
            "Resolved {} classes ({} concept assignments, {} unresolved specs)",
            classes.len(),
            concept_count,
            unresolved.len()
        );

        Ok(Resolution {
            model: Model::new(spec.name.clone(), classes),
            unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use modelspec_taxa::{FailureClass, ProviderLimits, StaticTaxaProvider};

    use super::*;
    use crate::models::{Class, ClassSpec, Concept, ConceptSpec};
    use crate::resolve::SpecRole;

    fn foo_provider() -> Arc<dyn TaxaProvider> {
        Arc::new(StaticTaxaProvider::new().with_taxon("Foo", &["Bar", "Baz"]))
    }

    fn foo_spec() -> ModelSpec {
        ModelSpec {
            name: "M".to_string(),
            classes: vec![
                ClassSpec::new("A", vec![ConceptSpec::new("Foo", true)], Vec::new()),
                ClassSpec::new("B", vec![ConceptSpec::new("Foo", false)], Vec::new()),
            ],
        }
    }

    #[tokio::test]
    async fn test_resolves_every_class_in_order() {
        let resolution = ModelResolver::new(foo_provider())
            .resolve(&foo_spec())
            .await
            .unwrap();

        assert_eq!(
            resolution.model,
            Model::new(
                "M",
                vec![
                    Class::new(
                        "A",
                        vec![
                            Concept::whole("Foo"),
                            Concept::whole("Bar"),
                            Concept::whole("Baz")
                        ]
                    ),
                    Class::new("B", vec![Concept::whole("Foo")]),
                ]
            )
        );
        assert!(resolution.unresolved.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_taxon_leaves_empty_classes() {
        let provider: Arc<dyn TaxaProvider> = Arc::new(StaticTaxaProvider::new());
        let resolution = ModelResolver::new(provider)
            .resolve(&foo_spec())
            .await
            .unwrap();

        assert_eq!(resolution.model.classes.len(), 2);
        assert!(resolution.model.classes.iter().all(|c| c.concepts.is_empty()));
        let labels: Vec<&str> = resolution
            .unresolved
            .iter()
            .map(|u| u.class_label.as_str())
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_unknown_specs_do_not_disturb_other_classes() {
        let spec = ModelSpec {
            name: "M".to_string(),
            classes: vec![
                ClassSpec::new("A", vec![ConceptSpec::new("Missing", true)], Vec::new()),
                ClassSpec::new(
                    "B",
                    vec![ConceptSpec::new("Foo", true)],
                    vec![ConceptSpec::new("Gone", false)],
                ),
            ],
        };

        let resolution = ModelResolver::new(foo_provider())
            .resolve(&spec)
            .await
            .unwrap();

        assert_eq!(
            resolution.model.classes,
            vec![
                Class::new("A", Vec::new()),
                Class::new(
                    "B",
                    vec![
                        Concept::whole("Foo"),
                        Concept::whole("Bar"),
                        Concept::whole("Baz")
                    ]
                ),
            ]
        );
        assert_eq!(resolution.unresolved.len(), 2);
        assert_eq!(
            resolution.unresolved[0],
            UnresolvedConcept {
                class_label: "A".to_string(),
                concept: "Missing".to_string(),
                role: SpecRole::Include,
            }
        );
        assert_eq!(
            resolution.unresolved[1],
            UnresolvedConcept {
                class_label: "B".to_string(),
                concept: "Gone".to_string(),
                role: SpecRole::Exclude,
            }
        );
    }

    #[tokio::test]
    async fn test_notices_before_fatal_error_are_reported() {
        let provider: Arc<dyn TaxaProvider> =
            Arc::new(StaticTaxaProvider::new().with_failure("Foo", "HTTP 503"));
        let spec = ModelSpec {
            name: "M".to_string(),
            classes: vec![
                ClassSpec::new("A", vec![ConceptSpec::new("Missing", false)], Vec::new()),
                ClassSpec::new("B", vec![ConceptSpec::new("Foo", true)], Vec::new()),
            ],
        };

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let result = ModelResolver::new(provider)
            .with_max_concurrency(1)
            .on_unresolved(move |u| sink.lock().unwrap().push(u.to_string()))
            .resolve(&spec)
            .await;

        assert!(result.is_err());
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["Concept \"Missing\" not found.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fatal_error_aborts_run() {
        let provider: Arc<dyn TaxaProvider> = Arc::new(
            StaticTaxaProvider::new()
                .with_taxon("Foo", &["Bar"])
                .with_failure("Foo", "HTTP 500"),
        );
        let err = ModelResolver::new(provider)
            .resolve(&foo_spec())
            .await
            .unwrap_err();
        assert_eq!(err.class(), FailureClass::Fatal);
    }

    #[test]
    fn test_concurrency_defaults_to_provider_limit() {
        let provider: Arc<dyn TaxaProvider> =
            Arc::new(StaticTaxaProvider::new().with_limits(ProviderLimits { max_concurrency: 7 }));
        let resolver = ModelResolver::new(provider);
        assert_eq!(resolver.max_concurrency(), 7);
        assert_eq!(resolver.with_max_concurrency(0).max_concurrency(), 1);
    }

    /// Answers slowly for early classes so later classes finish first.
    struct StaggeredProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TaxaProvider for StaggeredProvider {
        fn id(&self) -> &'static str {
            "STAGGERED"
        }

        async fn descendants_of(&self, name: &str) -> Result<Vec<String>, TaxaError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay: u64 = name.trim_start_matches('T').parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(50 - delay * 10)).await;
            Ok(vec![name.to_string()])
        }
    }

    #[tokio::test]
    async fn test_concurrent_resolution_preserves_spec_order() {
        let provider = Arc::new(StaggeredProvider {
            calls: AtomicUsize::new(0),
        });
        let spec = ModelSpec {
            name: "staggered".to_string(),
            classes: (0..5)
                .map(|i| {
                    ClassSpec::new(
                        format!("class-{}", i),
                        vec![ConceptSpec::new(format!("T{}", i), false)],
                        Vec::new(),
                    )
                })
                .collect(),
        };

        let resolution = ModelResolver::new(provider.clone())
            .with_max_concurrency(5)
            .resolve(&spec)
            .await
            .unwrap();

        let labels: Vec<&str> = resolution
            .model
            .classes
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["class-0", "class-1", "class-2", "class-3", "class-4"]
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 5);
    }
}
