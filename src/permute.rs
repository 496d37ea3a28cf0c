//! Compile-time derivation of 4-lane permutation sequences.
//!
//! aarch64 NEON has no general "permute 32-bit lanes by immediate"
//! instruction the way x86 has `pshufd`. What it does have is a family of
//! cheap fixed permutation primitives: duplicate-lane (`DUP`), lane copy
//! (`INS`/`vcopyq_laneq`), extract-rotate (`EXT`), transpose (`TRN1/2`),
//! zip/unzip (`ZIP1/2`, `UZP1/2`) and 64-bit pair reverse (`REV64`).
//!
//! Every one of the 256 possible 4-lane permutations (lane sources may
//! repeat) is expressible as a sequence of at most three of those primitives.
//! Rather than hand-transcribing 256 cases, this module derives the whole
//! table once at compile time: a `const fn` breadth-first search over the
//! 256-state lane-assignment space finds the shortest sequence for every
//! target, and panics at const-eval time (failing the build) if any target
//! were to need more than three steps. The NEON backend indexes the table
//! with its compile-time shuffle indices and unrolls the resulting 0–3 steps,
//! so each monomorphized shuffle folds down to its literal instruction
//! sequence.
//!
//! The table is target-independent data about the primitive algebra, so it is
//! built and unit-tested on every architecture, not just aarch64.

/// Operand selection for the two-input primitives.
///
/// `Cur` is the intermediate vector produced by the previous step; `Orig` is
/// the untouched shuffle input. Mixing the two widens the set of assignments
/// reachable per step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operands {
    CurCur,
    CurOrig,
    OrigCur,
}

/// One primitive permutation step.
///
/// Semantics are given as output lane assignments for inputs `a`/`b` (see
/// [`Operands`] for what `a` and `b` are):
/// - `Dup { lane }`: all four lanes take `cur[lane]`
/// - `Rev64`: `[cur1, cur0, cur3, cur2]`
/// - `Ext { n }`: rotate, `out[k] = cur[(k + n) % 4]`
/// - `Trn1`: `[a0, b0, a2, b2]`, `Trn2`: `[a1, b1, a3, b3]`
/// - `Zip1`: `[a0, b0, a1, b1]`, `Zip2`: `[a2, b2, a3, b3]`
/// - `Uzp1`: `[a0, a2, b0, b2]`, `Uzp2`: `[a1, a3, b1, b3]`
/// - `CopyCur { dst, src }`: insert `cur[src]` into lane `dst`
/// - `CopyOrig { dst, src }`: insert `orig[src]` into lane `dst`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PermStep {
    Dup { lane: u8 },
    Rev64,
    Ext { n: u8 },
    Trn1 { ops: Operands },
    Trn2 { ops: Operands },
    Zip1 { ops: Operands },
    Zip2 { ops: Operands },
    Uzp1 { ops: Operands },
    Uzp2 { ops: Operands },
    CopyCur { dst: u8, src: u8 },
    CopyOrig { dst: u8, src: u8 },
}

/// A derived sequence: `steps[..len]` applied left to right. `len == 0` is
/// the identity permutation (no instruction emitted).
#[derive(Clone, Copy, Debug)]
pub struct PermSeq {
    pub len: u8,
    pub steps: [PermStep; 3],
}

/// Encode a lane assignment as a table index: two bits per output lane,
/// output lane 0 in the low bits.
pub const fn encode(a: [u8; 4]) -> usize {
    (a[0] as usize) | ((a[1] as usize) << 2) | ((a[2] as usize) << 4) | ((a[3] as usize) << 6)
}

const fn decode(s: usize) -> [u8; 4] {
    [
        (s & 3) as u8,
        ((s >> 2) & 3) as u8,
        ((s >> 4) & 3) as u8,
        ((s >> 6) & 3) as u8,
    ]
}

const IDENTITY: [u8; 4] = [0, 1, 2, 3];

/// Number of candidate primitive steps considered by the search:
/// 4 dup + 1 rev64 + 3 ext + 6 pair ops x 3 operand choices
/// + 12 self-copies (dst != src) + 16 copies from the original input.
const OP_COUNT: usize = 54;

const OPS: [PermStep; OP_COUNT] = build_ops();

const fn build_ops() -> [PermStep; OP_COUNT] {
    let mut ops = [PermStep::Rev64; OP_COUNT];
    let mut k = 0;

    let mut lane = 0u8;
    while lane < 4 {
        ops[k] = PermStep::Dup { lane };
        k += 1;
        lane += 1;
    }

    ops[k] = PermStep::Rev64;
    k += 1;

    let mut n = 1u8;
    while n < 4 {
        ops[k] = PermStep::Ext { n };
        k += 1;
        n += 1;
    }

    let mut kind = 0;
    while kind < 6 {
        let mut sel = 0;
        while sel < 3 {
            let operands = match sel {
                0 => Operands::CurCur,
                1 => Operands::CurOrig,
                _ => Operands::OrigCur,
            };
            ops[k] = match kind {
                0 => PermStep::Trn1 { ops: operands },
                1 => PermStep::Trn2 { ops: operands },
                2 => PermStep::Zip1 { ops: operands },
                3 => PermStep::Zip2 { ops: operands },
                4 => PermStep::Uzp1 { ops: operands },
                _ => PermStep::Uzp2 { ops: operands },
            };
            k += 1;
            sel += 1;
        }
        kind += 1;
    }

    let mut dst = 0u8;
    while dst < 4 {
        let mut src = 0u8;
        while src < 4 {
            if dst != src {
                ops[k] = PermStep::CopyCur { dst, src };
                k += 1;
            }
            src += 1;
        }
        dst += 1;
    }

    let mut dst = 0u8;
    while dst < 4 {
        let mut src = 0u8;
        while src < 4 {
            ops[k] = PermStep::CopyOrig { dst, src };
            k += 1;
            src += 1;
        }
        dst += 1;
    }

    assert!(k == OP_COUNT);
    ops
}

const fn pick(ops: Operands, cur: [u8; 4]) -> ([u8; 4], [u8; 4]) {
    match ops {
        Operands::CurCur => (cur, cur),
        Operands::CurOrig => (cur, IDENTITY),
        Operands::OrigCur => (IDENTITY, cur),
    }
}

/// Apply one step to a lane assignment (each entry names the original input
/// lane currently held by that output lane).
pub const fn apply(step: PermStep, cur: [u8; 4]) -> [u8; 4] {
    match step {
        PermStep::Dup { lane } => {
            let v = cur[lane as usize];
            [v, v, v, v]
        }
        PermStep::Rev64 => [cur[1], cur[0], cur[3], cur[2]],
        PermStep::Ext { n } => {
            let n = n as usize;
            [cur[n % 4], cur[(n + 1) % 4], cur[(n + 2) % 4], cur[(n + 3) % 4]]
        }
        PermStep::Trn1 { ops } => {
            let (a, b) = pick(ops, cur);
            [a[0], b[0], a[2], b[2]]
        }
        PermStep::Trn2 { ops } => {
            let (a, b) = pick(ops, cur);
            [a[1], b[1], a[3], b[3]]
        }
        PermStep::Zip1 { ops } => {
            let (a, b) = pick(ops, cur);
            [a[0], b[0], a[1], b[1]]
        }
        PermStep::Zip2 { ops } => {
            let (a, b) = pick(ops, cur);
            [a[2], b[2], a[3], b[3]]
        }
        PermStep::Uzp1 { ops } => {
            let (a, b) = pick(ops, cur);
            [a[0], a[2], b[0], b[2]]
        }
        PermStep::Uzp2 { ops } => {
            let (a, b) = pick(ops, cur);
            [a[1], a[3], b[1], b[3]]
        }
        PermStep::CopyCur { dst, src } => {
            let mut r = cur;
            r[dst as usize] = cur[src as usize];
            r
        }
        PermStep::CopyOrig { dst, src } => {
            let mut r = cur;
            r[dst as usize] = src;
            r
        }
    }
}

/// Shortest primitive sequence for every 4-lane permutation, indexed by
/// [`encode`] of the target assignment.
pub const PERM4_TABLE: [PermSeq; 256] = build_table();

const fn build_table() -> [PermSeq; 256] {
    // Breadth-first search from the identity assignment; first visit is the
    // shortest path because every step has unit cost.
    let mut dist = [u8::MAX; 256];
    let mut prev_state = [0u8; 256];
    let mut prev_op = [0u8; 256];
    let mut queue = [0u8; 256];
    let mut head = 0usize;
    let mut tail = 0usize;

    let id = encode(IDENTITY);
    dist[id] = 0;
    queue[tail] = id as u8;
    tail += 1;

    while head < tail {
        let s = queue[head] as usize;
        head += 1;
        let cur = decode(s);
        let mut oi = 0;
        while oi < OP_COUNT {
            let next = encode(apply(OPS[oi], cur));
            if dist[next] == u8::MAX {
                dist[next] = dist[s] + 1;
                prev_state[next] = s as u8;
                prev_op[next] = oi as u8;
                queue[tail] = next as u8;
                tail += 1;
            }
            oi += 1;
        }
    }

    let mut table = [PermSeq {
        len: 0,
        steps: [PermStep::Rev64; 3],
    }; 256];
    let mut t = 0usize;
    while t < 256 {
        // The primitive set must cover every permutation in three steps; if
        // it ever does not, the build fails here instead of miscompiling.
        assert!(dist[t] <= 3, "4-lane permutation not reachable in 3 steps");
        let len = dist[t];
        let mut steps = [PermStep::Rev64; 3];
        let mut s = t;
        let mut i = len;
        while i > 0 {
            i -= 1;
            steps[i as usize] = OPS[prev_op[s] as usize];
            s = prev_state[s] as usize;
        }
        table[t] = PermSeq { len, steps };
        t += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a sequence on concrete lane values, mirroring the NEON executor.
    fn run(seq: PermSeq, input: [u32; 4]) -> [u32; 4] {
        fn pick_vals(ops: Operands, cur: [u32; 4], orig: [u32; 4]) -> ([u32; 4], [u32; 4]) {
            match ops {
                Operands::CurCur => (cur, cur),
                Operands::CurOrig => (cur, orig),
                Operands::OrigCur => (orig, cur),
            }
        }
        fn step_vals(step: PermStep, cur: [u32; 4], orig: [u32; 4]) -> [u32; 4] {
            match step {
                PermStep::Dup { lane } => [cur[lane as usize]; 4],
                PermStep::Rev64 => [cur[1], cur[0], cur[3], cur[2]],
                PermStep::Ext { n } => {
                    let n = n as usize;
                    [cur[n], cur[(n + 1) % 4], cur[(n + 2) % 4], cur[(n + 3) % 4]]
                }
                PermStep::Trn1 { ops } => {
                    let (a, b) = pick_vals(ops, cur, orig);
                    [a[0], b[0], a[2], b[2]]
                }
                PermStep::Trn2 { ops } => {
                    let (a, b) = pick_vals(ops, cur, orig);
                    [a[1], b[1], a[3], b[3]]
                }
                PermStep::Zip1 { ops } => {
                    let (a, b) = pick_vals(ops, cur, orig);
                    [a[0], b[0], a[1], b[1]]
                }
                PermStep::Zip2 { ops } => {
                    let (a, b) = pick_vals(ops, cur, orig);
                    [a[2], b[2], a[3], b[3]]
                }
                PermStep::Uzp1 { ops } => {
                    let (a, b) = pick_vals(ops, cur, orig);
                    [a[0], a[2], b[0], b[2]]
                }
                PermStep::Uzp2 { ops } => {
                    let (a, b) = pick_vals(ops, cur, orig);
                    [a[1], a[3], b[1], b[3]]
                }
                PermStep::CopyCur { dst, src } => {
                    let mut r = cur;
                    r[dst as usize] = cur[src as usize];
                    r
                }
                PermStep::CopyOrig { dst, src } => {
                    let mut r = cur;
                    r[dst as usize] = orig[src as usize];
                    r
                }
            }
        }
        let mut cur = input;
        for i in 0..seq.len as usize {
            cur = step_vals(seq.steps[i], cur, input);
        }
        cur
    }

    #[test]
    fn every_permutation_is_exact() {
        let input = [100, 200, 300, 400];
        for i3 in 0..4u8 {
            for i2 in 0..4u8 {
                for i1 in 0..4u8 {
                    for i0 in 0..4u8 {
                        let target = [i0, i1, i2, i3];
                        let seq = PERM4_TABLE[encode(target)];
                        let out = run(seq, input);
                        let expected = [
                            input[i0 as usize],
                            input[i1 as usize],
                            input[i2 as usize],
                            input[i3 as usize],
                        ];
                        assert_eq!(
                            out, expected,
                            "permute {:?} produced {:?} via {:?}",
                            target, out, seq
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sequences_are_short() {
        for seq in PERM4_TABLE.iter() {
            assert!(seq.len <= 3);
        }
    }

    #[test]
    fn identity_is_free() {
        assert_eq!(PERM4_TABLE[encode([0, 1, 2, 3])].len, 0);
    }

    #[test]
    fn single_step_patterns() {
        // Broadcasts and the pair-reverse are single instructions.
        for lane in 0..4u8 {
            assert_eq!(PERM4_TABLE[encode([lane; 4])].len, 1);
        }
        assert_eq!(PERM4_TABLE[encode([1, 0, 3, 2])].len, 1);
    }

    #[test]
    fn full_reverse_is_two_steps() {
        // rev64 + ext(2) is the canonical lane reversal.
        assert_eq!(PERM4_TABLE[encode([3, 2, 1, 0])].len, 2);
    }
}
