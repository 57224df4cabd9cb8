//! Brute-force truth-table checks for the URP cube-list kernel.
//!
//! Every property here is checked against every assignment of up to 4
//! variables, rather than on hand-picked examples, since the kernel's
//! correctness claims are claims about Boolean functions, not about
//! particular cube lists.

use urp_bdd::pcn::{Cube, CubeList};
use urp_bdd::urp;

fn truth(cubes: &CubeList, assignment: &[bool]) -> bool {
    cubes.iter().any(|cube| {
        cube.literals().iter().all(|&l| {
            let var = l.unsigned_abs() as usize;
            let want = l > 0;
            assignment[var - 1] == want
        })
    })
}

fn assignments(num_vars: usize) -> Vec<Vec<bool>> {
    (0..1u32 << num_vars)
        .map(|mask| (0..num_vars).map(|i| (mask >> i) & 1 == 1).collect())
        .collect()
}

fn for_all(num_vars: usize, mut check: impl FnMut(&[bool])) {
    for assignment in assignments(num_vars) {
        check(&assignment);
    }
}

fn sample_functions(num_vars: usize) -> Vec<CubeList> {
    // A handful of cube lists exercising different shapes: empty, true,
    // a single literal, a binate pair, and a function spanning every
    // variable.
    let mut out = vec![Vec::new(), vec![Cube::dont_care()]];
    if num_vars >= 1 {
        out.push(vec![Cube::new(vec![1])]);
        out.push(vec![Cube::new(vec![-1])]);
    }
    if num_vars >= 2 {
        out.push(vec![Cube::new(vec![1, -2]), Cube::new(vec![-1, 2])]);
        out.push(vec![Cube::new(vec![1, 2]), Cube::new(vec![-1, -2])]);
    }
    if num_vars >= 3 {
        out.push(vec![
            Cube::new(vec![1, 2]),
            Cube::new(vec![-1, 3]),
            Cube::new(vec![2, -3]),
        ]);
    }
    out
}

#[test]
fn complement_is_truth_table_negation() {
    let num_vars = 4;
    for f in sample_functions(num_vars) {
        let not_f = urp::complement(&f);
        for_all(num_vars, |a| {
            assert_eq!(truth(&not_f, a), !truth(&f, a));
        });
    }
}

#[test]
fn complement_is_involutive_as_a_function() {
    let num_vars = 3;
    for f in sample_functions(num_vars) {
        let not_not_f = urp::complement(&urp::complement(&f));
        for_all(num_vars, |a| {
            assert_eq!(truth(&not_not_f, a), truth(&f, a));
        });
    }
}

#[test]
fn or_and_and_match_truth_tables() {
    let num_vars = 3;
    let fs = sample_functions(num_vars);
    for f in &fs {
        for g in &fs {
            let or_fg = urp::or(f, g);
            let and_fg = urp::and(f, g);
            for_all(num_vars, |a| {
                assert_eq!(truth(&or_fg, a), truth(f, a) || truth(g, a));
                assert_eq!(truth(&and_fg, a), truth(f, a) && truth(g, a));
            });
        }
    }
}

#[test]
fn xor_matches_truth_table() {
    let num_vars = 3;
    let fs = sample_functions(num_vars);
    for f in &fs {
        for g in &fs {
            let xor_fg = urp::xor(f, g);
            for_all(num_vars, |a| {
                assert_eq!(truth(&xor_fg, a), truth(f, a) != truth(g, a));
            });
        }
    }
}

#[test]
fn or_is_commutative_and_associative_as_a_function() {
    let num_vars = 3;
    let fs = sample_functions(num_vars);
    for f in &fs {
        for g in &fs {
            let fg = urp::or(f, g);
            let gf = urp::or(g, f);
            for_all(num_vars, |a| {
                assert_eq!(truth(&fg, a), truth(&gf, a));
            });
        }
    }
    let (f, g, h) = (&fs[0], &fs[2.min(fs.len() - 1)], &fs[fs.len() - 1]);
    let left = urp::or(&urp::or(f, g), h);
    let right = urp::or(f, &urp::or(g, h));
    for_all(num_vars, |a| {
        assert_eq!(truth(&left, a), truth(&right, a));
    });
}

#[test]
fn de_morgan_holds_for_and_and_or() {
    let num_vars = 3;
    let fs = sample_functions(num_vars);
    for f in &fs {
        for g in &fs {
            let not_and = urp::complement(&urp::and(f, g));
            let or_of_nots = urp::or(&urp::complement(f), &urp::complement(g));
            for_all(num_vars, |a| {
                assert_eq!(truth(&not_and, a), truth(&or_of_nots, a));
            });
        }
    }
}

#[test]
fn shannon_expansion_reconstructs_the_function() {
    let num_vars = 3;
    for f in sample_functions(num_vars) {
        for var in 1..=num_vars {
            let pos = urp::positive_cofactor(&f, var);
            let neg = urp::negative_cofactor(&f, var);
            let x = vec![Cube::new(vec![var as i32])];
            let not_x = vec![Cube::new(vec![-(var as i32)])];
            let reconstructed = urp::or(&urp::and(&x, &pos), &urp::and(&not_x, &neg));
            for_all(num_vars, |a| {
                assert_eq!(truth(&reconstructed, a), truth(&f, a));
            });
        }
    }
}

#[test]
fn bool_diff_matches_its_truth_table_definition() {
    let num_vars = 3;
    for f in sample_functions(num_vars) {
        for var in 1..=num_vars {
            let diff = urp::bool_diff(&f, var);
            for_all(num_vars, |a| {
                let mut flipped = a.to_vec();
                flipped[var - 1] = !flipped[var - 1];
                let expected = truth(&f, a) != truth(&f, &flipped);
                assert_eq!(truth(&diff, a), expected);
            });
        }
    }
}

#[test]
fn consensus_and_smoothing_match_quantifier_definitions() {
    let num_vars = 3;
    for f in sample_functions(num_vars) {
        for var in 1..=num_vars {
            let consensus = urp::consensus(&f, var);
            let smoothing = urp::smoothing(&f, var);
            for_all(num_vars, |a| {
                let mut on = a.to_vec();
                on[var - 1] = true;
                let mut off = a.to_vec();
                off[var - 1] = false;
                assert_eq!(truth(&consensus, a), truth(&f, &on) && truth(&f, &off));
                assert_eq!(truth(&smoothing, a), truth(&f, &on) || truth(&f, &off));
            });
        }
    }
}

#[test]
fn pcn_round_trip_preserves_the_function() {
    use urp_bdd::pcn;

    let num_vars = 3;
    for f in sample_functions(num_vars) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.pcn");
        pcn::write(&path, &f, num_vars).unwrap();
        let value = pcn::parse(&path).unwrap();
        for_all(num_vars, |a| {
            assert_eq!(truth(&value.cubes, a), truth(&f, a));
        });
    }
}
