use crate::catalog::{Catalog, WordPair};

/// Case-fold a string for comparison.
///
/// `str::to_lowercase` applies the full Unicode lowercase mapping, so
/// Cyrillic capitals (including `Ё`) fold the same way ASCII ones do.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Whether either word of `pair` contains the already folded `needle`.
pub fn matches_folded(pair: &WordPair, needle: &str) -> bool {
    needle.is_empty() || fold(&pair.word1).contains(needle) || fold(&pair.word2).contains(needle)
}

/// Pairs whose words contain `query`, in their original order.
///
/// An empty query keeps everything. Works on the catalog itself or on any
/// previously narrowed list of pairs.
pub fn filter<'a, I>(pairs: I, query: &str) -> Vec<&'a WordPair>
where
    I: IntoIterator<Item = &'a WordPair>,
{
    let needle = fold(query);
    pairs
        .into_iter()
        .filter(|pair| matches_folded(pair, &needle))
        .collect()
}

/// Catalog positions of the pairs matching `query`.
pub fn filter_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
    let needle = fold(query);
    if needle.is_empty() {
        return (0..catalog.len()).collect();
    }
    catalog
        .iter()
        .enumerate()
        .filter(|(_, pair)| matches_folded(pair, &needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_pair;
    use proptest::prelude::*;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn ids(pairs: &[&WordPair]) -> Vec<u32> {
        pairs.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_whole_catalog() {
        let catalog = builtin();
        let result = filter(&catalog, "");
        assert_eq!(result.len(), catalog.len());
        for (got, expected) in result.iter().zip(catalog.iter()) {
            assert!(std::ptr::eq(*got, expected));
        }
        assert_eq!(filter_indices(&catalog, ""), (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_prefix_match_on_first_word() {
        let catalog = builtin();
        let result = filter(&catalog, "эффект");
        assert_eq!(ids(&result), vec![1]);
        assert_eq!(result[0].word1, "эффектный");
    }

    #[test]
    fn test_uppercase_cyrillic_query() {
        let catalog = builtin();
        assert_eq!(ids(&filter(&catalog, "ЭФФЕКТ")), ids(&filter(&catalog, "эффект")));
        assert_eq!(ids(&filter(&catalog, "АдРеС")), vec![2]);
    }

    #[test]
    fn test_match_on_second_word_only() {
        let catalog = builtin();
        assert_eq!(ids(&filter(&catalog, "предос")), vec![5]);
        assert_eq!(ids(&filter(&catalog, "одеть")), vec![6]);
    }

    #[test]
    fn test_definitions_are_not_searched() {
        let catalog = builtin();
        assert!(filter(&catalog, "посылки").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = builtin();
        assert!(filter(&catalog, "zzz-no-match").is_empty());
        assert!(filter_indices(&catalog, "zzz-no-match").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let catalog = builtin();
        assert!(filter(&catalog, " абонент").is_empty());
    }

    #[test]
    fn test_shared_substring_keeps_catalog_order() {
        let catalog = builtin();
        assert_eq!(ids(&filter(&catalog, "а")), vec![2, 3, 4, 5, 6]);
        assert_eq!(ids(&filter(&catalog, "не")), vec![3, 4]);
    }

    #[test]
    fn test_yo_folds() {
        let catalog = Catalog::new(vec![sample_pair(1, "Ёлка", "ель")]).unwrap();
        assert_eq!(filter(&catalog, "ёл").len(), 1);
        assert_eq!(filter(&catalog, "ЁЛ").len(), 1);
    }

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec(("[а-еА-ЕёЁ]{1,6}", "[а-еА-ЕёЁ]{1,6}"), 0..12).prop_map(|words| {
            let pairs = words
                .iter()
                .enumerate()
                .map(|(i, (w1, w2))| sample_pair(i as u32 + 1, w1, w2))
                .collect();
            Catalog::new(pairs).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_result_is_ordered_subsequence(catalog in arb_catalog(), query in "[а-еА-ЕёЁ]{0,3}") {
            let indices = filter_indices(&catalog, &query);
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            let result = filter(&catalog, &query);
            let from_indices: Vec<&WordPair> = indices.iter().map(|&i| &catalog.pairs()[i]).collect();
            prop_assert_eq!(result, from_indices);
        }

        #[test]
        fn prop_result_is_exactly_the_matching_pairs(catalog in arb_catalog(), query in "[а-еА-ЕёЁ]{0,3}") {
            let result = filter(&catalog, &query);
            let needle = query.to_lowercase();
            for pair in &catalog {
                let expected = pair.word1.to_lowercase().contains(&needle)
                    || pair.word2.to_lowercase().contains(&needle);
                let included = result.iter().any(|p| std::ptr::eq(*p, pair));
                prop_assert_eq!(expected, included);
            }
        }

        #[test]
        fn prop_refilter_is_stable(catalog in arb_catalog(), query in "[а-еА-ЕёЁ]{0,3}") {
            let once = filter(&catalog, &query);
            let twice = filter(once.iter().copied(), &query);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_case_of_query_is_irrelevant(catalog in arb_catalog(), query in "[а-еА-ЕёЁ]{0,3}") {
            let upper = filter(&catalog, &query.to_uppercase());
            let lower = filter(&catalog, &query.to_lowercase());
            prop_assert_eq!(upper, lower);
        }
    }
}
