use cave_logic::{
    builder::read_clauses,
    procedures::resolution::{resolution, resolution_with_counters, Refutation},
    reports::Entailment,
    structures::{clause::Clause, coordinate::Coordinate, label::Label, literal::Literal},
};

fn clauses(texts: &[&str]) -> Vec<Clause> {
    texts.iter().map(|text| text.parse().unwrap()).collect()
}

fn goal(text: &str) -> Clause {
    text.parse().unwrap()
}

mod scenarios {
    use super::*;

    #[test]
    fn fact_entails_itself() {
        assert_eq!(resolution(clauses(&["A"]), &goal("A")), Entailment::Entailed);
    }

    #[test]
    fn fact_does_not_entail_another() {
        assert_eq!(
            resolution(clauses(&["A"]), &goal("B")),
            Entailment::NotEntailed
        );
    }

    #[test]
    fn duplicate_literals_collapse() {
        let premises = clauses(&["A A A"]);
        assert_eq!(premises[0].size(), 1);
        assert_eq!(resolution(premises, &goal("A")), Entailment::Entailed);
    }

    #[test]
    fn tautology_carries_no_information() {
        assert_eq!(
            resolution(clauses(&["A -A"]), &goal("A")),
            Entailment::NotEntailed
        );
    }

    #[test]
    fn chain_through_equivalence() {
        // A gives B, B gives E, and E rules out D, so one of D and A fails.
        let premises = clauses(&["-A B", "-B E", "-E B", "C", "-D -E"]);
        assert_eq!(resolution(premises, &goal("-D -A")), Entailment::Entailed);
    }

    #[test]
    fn remaining_neighbour_holds_the_hazard() {
        let premises = clauses(&["-S W1 W2 W3 W4", "-W1", "-W2", "-W3", "S"]);
        assert_eq!(resolution(premises, &goal("W4")), Entailment::Entailed);
    }
}

mod saturation {
    use super::*;

    #[test]
    fn empty_knowledge_base() {
        assert_eq!(
            resolution(Vec::<Clause>::default(), &goal("A")),
            Entailment::NotEntailed
        );
    }

    #[test]
    fn implication_without_antecedent() {
        assert_eq!(
            resolution(clauses(&["-A B"]), &goal("B")),
            Entailment::NotEntailed
        );
    }

    #[test]
    fn modus_ponens() {
        assert_eq!(
            resolution(clauses(&["-A B", "A"]), &goal("B")),
            Entailment::Entailed
        );
    }

    #[test]
    fn long_chain() {
        let premises = clauses(&["P0", "-P0 P1", "-P1 P2", "-P2 P3", "-P3 P4", "-P4 P5"]);
        assert_eq!(resolution(premises.clone(), &goal("P5")), Entailment::Entailed);
        assert_eq!(resolution(premises, &goal("-P5")), Entailment::NotEntailed);
    }

    #[test]
    fn disjunctive_goal() {
        let premises = clauses(&["A B"]);
        assert_eq!(resolution(premises.clone(), &goal("A B")), Entailment::Entailed);
        assert_eq!(resolution(premises, &goal("A")), Entailment::NotEntailed);
    }

    #[test]
    fn case_split() {
        let premises = clauses(&["A B", "-A C", "-B C"]);
        assert_eq!(resolution(premises, &goal("C")), Entailment::Entailed);
    }
}

mod refutation {
    use super::*;

    #[test]
    fn single_round() {
        let mut refutation = Refutation::new(clauses(&["A"]), &goal("A"));
        assert_eq!(refutation.round(), Some(Entailment::Entailed));
        assert_eq!(refutation.counters.rounds, 1);
    }

    #[test]
    fn support_advances() {
        let premises = clauses(&["-A B", "-B C", "A"]);
        let mut refutation = Refutation::new(premises, &goal("C"));

        assert!(refutation.set_of_support().contains(&goal("-C")));
        assert_eq!(refutation.round(), None);

        // The negated goal joins the knowledge base, and its resolvent is the new support.
        assert!(refutation.clauses().contains(&goal("-C")));
        assert!(refutation.set_of_support().contains(&goal("-B")));

        assert_eq!(refutation.run(), Entailment::Entailed);
    }

    #[test]
    fn counts() {
        let (report, counters) = resolution_with_counters(clauses(&["A -A", "B"]), &goal("B"));
        assert_eq!(report, Entailment::Entailed);
        assert_eq!(counters.tautologies_removed, 1);
        assert!(counters.pairs_resolved >= 1);
    }
}

mod located {
    use super::*;

    #[test]
    fn labels_at_coordinates() {
        let here = Coordinate::new(2, 2);
        let north = Coordinate::new(2, 3);
        let east = Coordinate::new(3, 2);

        let premises = vec![
            Clause::from([
                Literal::new(Label::Stench, here, false),
                Literal::new(Label::Wumpus, north, true),
                Literal::new(Label::Wumpus, east, true),
            ]),
            Clause::from(Literal::new(Label::Stench, here, true)),
            Clause::from(Literal::new(Label::Wumpus, east, false)),
        ];

        let wumpus_north = Clause::from(Literal::new(Label::Wumpus, north, true));
        assert_eq!(resolution(premises.clone(), &wumpus_north), Entailment::Entailed);

        // The same label elsewhere is a different proposition.
        let wumpus_elsewhere = Clause::from(Literal::new(Label::Wumpus, Coordinate::new(1, 2), true));
        assert_eq!(resolution(premises, &wumpus_elsewhere), Entailment::NotEntailed);
    }

    #[test]
    fn from_text() {
        let text = "\
# A stench at (1,1), with the wumpus not at (1,2)
-s(1,1) w(1,2) w(2,1)
s(1,1)
-w(1,2)
";
        let premises = read_clauses(text.as_bytes()).unwrap();
        assert_eq!(premises.len(), 3);
        assert_eq!(resolution(premises, &goal("w(2,1)")), Entailment::Entailed);
    }
}
