use video_recipe::{parse_sections, IngredientEntry, RecipeSections};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const WELL_FORMED: &str = "\
1. Ingredients
Spaghetti | 400g
Guanciale | 150g
Pecorino Romano | 50g
Eggs | 4 yolks
Black pepper | N/A

2. Preparation required before cooking
Cut the guanciale into strips
Grate the pecorino
Whisk the yolks with the cheese

3. Recipe Instructions
Boil the pasta in salted water
Render the guanciale in a dry pan
Toss the pasta with the guanciale off the heat
Stir in the egg mixture with a splash of pasta water

4. Notes
Never add cream
Work quickly so the eggs do not scramble
";

#[test]
fn test_well_formed_response() {
    let sections = parse_sections(WELL_FORMED);

    assert_eq!(
        sections.ingredients,
        vec![
            IngredientEntry::new("Spaghetti", "400g"),
            IngredientEntry::new("Guanciale", "150g"),
            IngredientEntry::new("Pecorino Romano", "50g"),
            IngredientEntry::new("Eggs", "4 yolks"),
            IngredientEntry::new("Black pepper", "N/A"),
        ]
    );
    assert_eq!(
        sections.preparation,
        lines(&[
            "Cut the guanciale into strips",
            "Grate the pecorino",
            "Whisk the yolks with the cheese",
        ])
    );
    assert_eq!(
        sections.steps,
        lines(&[
            "Boil the pasta in salted water",
            "Render the guanciale in a dry pan",
            "Toss the pasta with the guanciale off the heat",
            "Stir in the egg mixture with a splash of pasta water",
        ])
    );
    assert_eq!(
        sections.notes,
        lines(&["Never add cream", "Work quickly so the eggs do not scramble"])
    );
}

#[test]
fn test_no_headers_yields_empty_record() {
    let inputs = [
        "",
        "\n\n\n",
        "I'm sorry, I couldn't find a recipe in this transcript.",
        "Ingredients\nFlour | 200g\n\nSteps\nMix",
        "5. Extras\nSomething | else",
    ];

    for input in inputs {
        assert_eq!(parse_sections(input), RecipeSections::default(), "input: {:?}", input);
    }
}

#[test]
fn test_ingredient_split_on_first_separator() {
    let sections = parse_sections("1. Ingredients\nFlour | 2 | cups\n");
    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Flour", "2 | cups")]);
}

#[test]
fn test_ingredient_without_separator_is_dropped() {
    let sections = parse_sections("1. Ingredients\nSalt to taste\n");
    assert!(sections.ingredients.is_empty());

    let sections = parse_sections("1. Ingredients\nSalt to taste\nButter | 50g\nA pinch of love\n");
    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Butter", "50g")]);
}

#[test]
fn test_empty_ingredient_parts_are_kept() {
    let sections = parse_sections("1. Ingredients\n| 200g\nSugar |\n|\n");
    assert_eq!(
        sections.ingredients,
        vec![
            IngredientEntry::new("", "200g"),
            IngredientEntry::new("Sugar", ""),
            IngredientEntry::new("", ""),
        ]
    );
}

#[test]
fn test_duplicates_preserved_in_order() {
    let sections = parse_sections("1. Ingredients\nSalt | 1 tsp\nSalt | 1 tsp\n\n4. Notes\nTaste\nTaste\n");
    assert_eq!(
        sections.ingredients,
        vec![
            IngredientEntry::new("Salt", "1 tsp"),
            IngredientEntry::new("Salt", "1 tsp"),
        ]
    );
    assert_eq!(sections.notes, lines(&["Taste", "Taste"]));
}

#[test]
fn test_header_that_is_also_a_boundary() {
    let input = "1. Ingredients\nFlour | 200g\n2. Preparation required before cooking\nPreheat oven\n";
    let sections = parse_sections(input);

    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Flour", "200g")]);
    assert_eq!(sections.preparation, lines(&["Preheat oven"]));
    assert!(sections.steps.is_empty());
    assert!(sections.notes.is_empty());
}

#[test]
fn test_sections_back_to_back_without_blank_lines() {
    let input = "\
1. Ingredients
Rice | 1 cup
2. Preparation required before cooking
Rinse the rice
3. Recipe Instructions
Simmer for 15 minutes
4. Notes
Rest covered for 5 minutes";

    let sections = parse_sections(input);
    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Rice", "1 cup")]);
    assert_eq!(sections.preparation, lines(&["Rinse the rice"]));
    assert_eq!(sections.steps, lines(&["Simmer for 15 minutes"]));
    assert_eq!(sections.notes, lines(&["Rest covered for 5 minutes"]));
}

#[test]
fn test_unrecognized_numbered_header_closes_section() {
    let input = "\
3. Recipe Instructions
Bake for 20 minutes
5. Wine pairing
A dry riesling
Something else
4. Notes
Cool before slicing";

    let sections = parse_sections(input);
    assert_eq!(sections.steps, lines(&["Bake for 20 minutes"]));
    assert_eq!(sections.notes, lines(&["Cool before slicing"]));
}

#[test]
fn test_numbered_line_inside_section_ends_it() {
    let sections = parse_sections("3. Recipe Instructions\nHeat the pan\n1. Add oil\nAdd onions\n");
    assert_eq!(sections.steps, lines(&["Heat the pan"]));
}

#[test]
fn test_blank_line_ends_section_and_trailing_text_is_dropped() {
    let sections = parse_sections("4. Notes\nFreezes well\n\nHope you enjoy this recipe!\n");
    assert_eq!(sections.notes, lines(&["Freezes well"]));
}

#[test]
fn test_whitespace_and_crlf_are_trimmed() {
    let input = "  1. Ingredients  \r\n   Garlic   |   3 cloves  \r\n\t\r\n   2. Preparation required before cooking\r\n\t Peel the garlic \r\n";
    let sections = parse_sections(input);

    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Garlic", "3 cloves")]);
    assert_eq!(sections.preparation, lines(&["Peel the garlic"]));
}

#[test]
fn test_lone_carriage_returns_separate_lines() {
    let sections = parse_sections("1. Ingredients\rFlour | 200g\r\r4. Notes\rEnjoy\r");

    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Flour", "200g")]);
    assert_eq!(sections.notes, lines(&["Enjoy"]));
}

#[test]
fn test_unicode_line_separators_separate_lines() {
    let sections = parse_sections("1. Ingredients\u{2028}Flour | 200g\u{2029}\u{2029}4. Notes\u{85}Enjoy");

    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Flour", "200g")]);
    assert_eq!(sections.notes, lines(&["Enjoy"]));
}

#[test]
fn test_numbered_line_in_other_script_ends_section() {
    let sections = parse_sections("3. Recipe Instructions\nSimmer\n٣. Serve\nGarnish\n");
    assert_eq!(sections.steps, lines(&["Simmer"]));
}

#[test]
fn test_headers_are_case_sensitive_prefixes() {
    let sections = parse_sections("1. INGREDIENTS\nFlour | 1kg\n");
    assert!(sections.ingredients.is_empty());

    let sections = parse_sections("1. Ingredients (serves 4)\nFlour | 1kg\n");
    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Flour", "1kg")]);
}

#[test]
fn test_sections_in_any_order() {
    let input = "4. Notes\nBest eaten fresh\n\n1. Ingredients\nBread | 1 loaf\n";
    let sections = parse_sections(input);

    assert_eq!(sections.notes, lines(&["Best eaten fresh"]));
    assert_eq!(sections.ingredients, vec![IngredientEntry::new("Bread", "1 loaf")]);
}

#[test]
fn test_repeated_section_appends() {
    let input = "3. Recipe Instructions\nFirst\n\n3. Recipe Instructions\nSecond\n";
    let sections = parse_sections(input);
    assert_eq!(sections.steps, lines(&["First", "Second"]));
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse_sections(WELL_FORMED);
    let second = parse_sections(WELL_FORMED);
    assert_eq!(first, second);
}

#[test]
fn test_parse_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| parse_sections(WELL_FORMED)))
        .collect();

    let expected = parse_sections(WELL_FORMED);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
