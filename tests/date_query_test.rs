use anyhow::Result;
use bookdeal::{Registry, SeedConfig};

#[test]
fn test_single_author_scenario() -> Result<()> {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane Doe")?;
    let moby = registry.add_book("Moby Dick")?;
    let war = registry.add_book("War and Peace")?;

    registry.sign_contract(jane, moby, "02/01/2001", 10)?;
    let second = registry.sign_contract(jane, war, "01/01/2001", 20)?;

    assert_eq!(registry.author(jane)?.total_royalties(), 30);

    let matching = registry.contracts_matching_date("01/01/2001");
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id(), second);
    Ok(())
}

#[test]
fn test_matches_sorted_by_author_then_title() -> Result<()> {
    let mut registry = Registry::new();
    let zoe = registry.add_author("Zoe")?;
    let adam = registry.add_author("Adam")?;
    let b = registry.add_book("B")?;
    let a = registry.add_book("A")?;
    let c = registry.add_book("C")?;

    registry.sign_contract(zoe, a, "01/01/2001", 1)?;
    registry.sign_contract(adam, b, "01/01/2001", 2)?;
    registry.sign_contract(adam, a, "01/01/2001", 3)?;
    registry.sign_contract(adam, c, "02/01/2001", 4)?;

    let order: Vec<(&str, &str)> = registry
        .contracts_matching_date("01/01/2001")
        .iter()
        .map(|contract| (contract.author().name(), contract.book().title()))
        .collect();
    assert_eq!(order, vec![("Adam", "A"), ("Adam", "B"), ("Zoe", "A")]);
    Ok(())
}

#[test]
fn test_date_match_is_exact() -> Result<()> {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane Doe")?;
    let moby = registry.add_book("Moby Dick")?;
    registry.sign_contract(jane, moby, "01/01/2001", 10)?;

    assert!(registry.contracts_matching_date("2001-01-01").is_empty());
    assert!(registry.contracts_matching_date(" 01/01/2001").is_empty());
    assert!(registry.contracts_matching_date("").is_empty());
    Ok(())
}

#[test]
fn test_sample_seed_query() -> Result<()> {
    let registry = SeedConfig::sample().build_registry()?;

    let matching: Vec<String> = registry
        .contracts_matching_date("01/01/2001")
        .iter()
        .map(|contract| contract.to_string())
        .collect();
    assert_eq!(
        matching,
        vec![
            "Contract(author: Name 1, book: Title 2, date: 01/01/2001, royalties: 20)",
            "Contract(author: Name 2, book: Title 4, date: 01/01/2001, royalties: 40)",
        ]
    );

    // Querying twice must not reset or reseed anything.
    assert_eq!(registry.contracts_matching_date("01/01/2001").len(), 2);
    assert_eq!(registry.contracts().count(), 4);
    assert_eq!(registry.authors().count(), 2);
    Ok(())
}
