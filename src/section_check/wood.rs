//! Tabulated allowable stresses for timber

use super::AllowableStresses;
use crate::analysis::LoadTerm;
use crate::elements::WoodSpecies;

/// Long-term and short-term values (N/mm²) of one allowable stress
type TermPair = [f64; 2];

struct WoodEntry {
    fc: TermPair,
    ft: TermPair,
    fb: TermPair,
    fs: TermPair,
}

const SUGI: WoodEntry = WoodEntry {
    fc: [7.2, 14.4],
    ft: [5.4, 10.8],
    fb: [7.8, 15.6],
    fs: [0.7, 1.4],
};

const HINOKI: WoodEntry = WoodEntry {
    fc: [9.6, 19.2],
    ft: [7.8, 15.6],
    fb: [10.8, 21.6],
    fs: [0.9, 1.8],
};

const MATSU: WoodEntry = WoodEntry {
    fc: [9.0, 18.0],
    ft: [6.6, 13.2],
    fb: [9.6, 19.2],
    fs: [0.9, 1.8],
};

fn entry(species: WoodSpecies) -> Option<&'static WoodEntry> {
    match species {
        WoodSpecies::Sugi => Some(&SUGI),
        WoodSpecies::Hinoki => Some(&HINOKI),
        WoodSpecies::Matsu => Some(&MATSU),
        WoodSpecies::Unknown => None,
    }
}

/// Allowable stresses of a timber species for the given load term, `None`
/// for a species without table data
pub fn allowable(species: WoodSpecies, load_term: LoadTerm) -> Option<AllowableStresses> {
    let e = entry(species)?;
    let k = load_term.table_index();
    Some(AllowableStresses {
        ft: e.ft[k],
        fc: e.fc[k],
        fb: e.fb[k],
        fs: e.fs[k],
    })
}
