use modelspec_taxa::{TaxaError, TaxaProvider};

use crate::models::{Concept, ConceptSpec};

/// Resolve one concept spec into concepts tagged with the spec's part.
///
/// The provider answers with the taxon first and its descendants after it.
/// Without `include_descendants` only that first name is kept.
///
/// `ConceptNotFound` is returned as is; the class resolver decides what to
/// do about it.
pub async fn resolve_concept(
    provider: &dyn TaxaProvider,
    spec: &ConceptSpec,
) -> Result<Vec<Concept>, TaxaError> {
    let names = provider.descendants_of(&spec.concept).await?;
    let keep = if spec.include_descendants {
        names.len()
    } else {
        1
    };

    Ok(names
        .into_iter()
        .take(keep)
        .map(|name| Concept::new(name, spec.part.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use modelspec_taxa::StaticTaxaProvider;

    use super::*;

    fn provider() -> StaticTaxaProvider {
        StaticTaxaProvider::new().with_taxon("Foo", &["Bar", "Baz"])
    }

    #[tokio::test]
    async fn test_with_descendants_keeps_everything() {
        let concepts = resolve_concept(&provider(), &ConceptSpec::new("Foo", true))
            .await
            .unwrap();
        assert_eq!(
            concepts,
            vec![
                Concept::whole("Foo"),
                Concept::whole("Bar"),
                Concept::whole("Baz")
            ]
        );
    }

    #[tokio::test]
    async fn test_without_descendants_keeps_only_the_taxon() {
        let concepts = resolve_concept(&provider(), &ConceptSpec::new("Foo", false))
            .await
            .unwrap();
        assert_eq!(concepts, vec![Concept::whole("Foo")]);
    }

    #[tokio::test]
    async fn test_part_is_applied_to_every_concept() {
        let spec = ConceptSpec::new("Foo", true).with_part("tentacle");
        let concepts = resolve_concept(&provider(), &spec).await.unwrap();
        assert_eq!(concepts.len(), 3);
        assert!(concepts.iter().all(|c| c.part == "tentacle"));
    }

    #[tokio::test]
    async fn test_not_found_propagates() {
        let err = resolve_concept(&provider(), &ConceptSpec::new("Qux", true))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
