use rand::Rng;

use crate::models::PinInfo;

struct PlaceEntry {
    name: &'static str,
    address: &'static str,
    opening_hours: &'static str,
    closing_hours: &'static str,
    phone: &'static str,
}

static PLACES: [PlaceEntry; 6] = [
    PlaceEntry {
        name: "Café del Jardín",
        address: "Plaza Principal 12, Centro",
        opening_hours: "07:30",
        closing_hours: "22:00",
        phone: "477 713 2045",
    },
    PlaceEntry {
        name: "Mercado Aldama",
        address: "Calle Aldama 305, Centro",
        opening_hours: "06:00",
        closing_hours: "18:00",
        phone: "477 716 8830",
    },
    PlaceEntry {
        name: "Farmacia San Juan",
        address: "Blvd. López Mateos 1410",
        opening_hours: "00:00",
        closing_hours: "23:59",
        phone: "477 714 0099",
    },
    PlaceEntry {
        name: "Librería El Puente",
        address: "Av. Madero 88",
        opening_hours: "10:00",
        closing_hours: "20:00",
        phone: "477 712 5561",
    },
    PlaceEntry {
        name: "Panadería La Espiga",
        address: "Calle Hidalgo 221",
        opening_hours: "06:30",
        closing_hours: "21:00",
        phone: "477 715 3378",
    },
    PlaceEntry {
        name: "Taller de Bicicletas Rueda Libre",
        address: "Calle Juárez 640",
        opening_hours: "09:00",
        closing_hours: "19:00",
        phone: "477 718 4402",
    },
];

/// Number of distinct places a pin can describe
pub fn place_count() -> usize {
    PLACES.len()
}

/// Pick one place uniformly at random
pub fn random_place<R: Rng + ?Sized>(rng: &mut R) -> PinInfo {
    let index = rng.gen_range(0..PLACES.len());
    place_at(index)
}

fn place_at(index: usize) -> PinInfo {
    let entry = &PLACES[index];
    PinInfo {
        name: entry.name.to_string(),
        address: entry.address.to_string(),
        opening_hours: entry.opening_hours.to_string(),
        closing_hours: entry.closing_hours.to_string(),
        phone: entry.phone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_filled() {
        for index in 0..place_count() {
            let place = place_at(index);
            assert!(!place.name.is_empty());
            assert!(!place.address.is_empty());
            assert!(!place.phone.is_empty());
        }
    }

    #[test]
    fn test_random_place_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let names: HashSet<String> = (0..500).map(|_| random_place(&mut rng).name).collect();
        assert_eq!(names.len(), place_count());
    }
}
