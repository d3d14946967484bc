use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 3, tags = ["macro-test", "counting"])]
struct CountHashes;

impl AocParser for CountHashes {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for CountHashes {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.matches('#').count().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 4)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("ok".into())
    }
}

#[test]
fn test_plugins_are_collected_with_tags() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let info = registry.get_info(2016, 3).unwrap();
    assert_eq!(info.parts, 1);
    assert_eq!(info.tags, &["macro-test", "counting"]);
    assert!(!registry.contains(2016, 4));

    let mut solver = registry.create_solver(2016, 3, "#.#\n##.").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "4");
}

#[test]
fn test_untagged_plugin_registers() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2016)
        .unwrap()
        .build();
    assert_eq!(registry.len(), 2);
    assert!(registry.get_info(2016, 4).unwrap().tags.is_empty());
}
