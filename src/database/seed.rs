use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::manager::DatabaseError;
use super::models::{FishSpecies, Location};

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn locations() -> Vec<Location> {
    let created_date = seeded_at();
    let location = |id: i32, name: &str, latitude: Decimal, longitude: Decimal, description: &str| Location {
        id,
        name: name.to_string(),
        latitude,
        longitude,
        description: Some(description.to_string()),
        order: id,
        created_date,
    };

    vec![
        location(
            1,
            "Flamingo, Everglades National Park",
            Decimal::new(2_514_127, 5),
            Decimal::new(-8_092_764, 5),
            "Southern headquarters of Everglades National Park, located at the end of the only road through the park from Florida City.",
        ),
        location(
            2,
            "Card Sound, Florida Keys",
            Decimal::new(252_873, 4),
            Decimal::new(-803_685, 4),
            "Fishing area near Card Sound Bridge, connecting mainland Florida to the Upper Keys.",
        ),
        location(
            3,
            "Little Duck Key, Florida Keys",
            Decimal::new(24_681_084, 6),
            Decimal::new(-81_231_998, 6),
            "Small island in the Lower Florida Keys at Mile Marker 40, west end of the Seven Mile Bridge.",
        ),
        location(
            4,
            "Turkey Point, Biscayne National Park",
            Decimal::new(254_341_667, 7),
            Decimal::new(-803_297_222, 7),
            "Area near Turkey Point Nuclear Plant, adjacent to Biscayne National Park in Homestead, Florida.",
        ),
    ]
}

const SPECIES: &[(&str, &str, &str)] = &[
    ("Common Snook", "Centropomus undecimalis", "Highly prized gamefish with distinctive black lateral line. Found in mangroves, inlets, and shallow flats. Slot limit 28-33 inches."),
    ("Tarpon", "Megalops atlanticus", "The 'Silver King' - massive gamefish known for spectacular jumps. Catch and release only. Found in channels, flats, and backcountry."),
    ("Redfish (Red Drum)", "Sciaenops ocellatus", "Copper-bronze fish with distinctive black spots. Excellent table fare and strong fighter. Found on flats and in shallow water."),
    ("Spotted Seatrout", "Cynoscion nebulosus", "Popular inshore gamefish with dark spots. Excellent eating and fun to catch. Found over grass flats and shallow waters."),
    ("Bonefish", "Albula vulpes", "The 'Gray Ghost' of the flats. Extremely wary and challenging to catch. Primarily found on shallow sandy flats in the Keys."),
    ("Permit", "Trachinotus falcatus", "Elite gamefish of the flats. Difficult to hook and strong fighter. Found on sandy flats and around wrecks in the Keys."),
    ("Mangrove Snapper", "Lutjanus griseus", "Excellent table fare found around mangroves and structure. Gray to reddish coloration with two canine teeth."),
    ("Jack Crevalle", "Caranx hippos", "Aggressive predator and strong fighter. Bronze to yellow coloration. Found in schools throughout South Florida waters."),
    ("Barracuda", "Sphyraena barracuda", "Fierce predator with razor-sharp teeth. Excellent for catching on artificial lures. Found around reefs and flats."),
    ("Sheepshead", "Archosargus probatocephalus", "Black and white striped fish with human-like teeth. Excellent table fare. Found around structure, docks, and bridges."),
    ("Black Drum", "Pogonias cromis", "Large bottom-dwelling fish with barbels under chin. Found in shallow waters and around oyster bars."),
    ("Flounder", "Paralichthys albigutta", "Flatfish that lies on sandy bottoms. Excellent table fare. Both eyes on the same side of head when mature."),
    ("Ladyfish", "Elops saurus", "Acrobatic fighter that jumps when hooked. Silver coloration. Found in shallow waters and canals throughout South Florida."),
    ("Spanish Mackerel", "Scomberomorus maculatus", "Fast-swimming fish with yellow spots. Good table fare when fresh. Found in nearshore and inshore waters."),
    ("Cobia", "Rachycentron canadum", "Large brown fish often mistaken for shark. Excellent eating and strong fighter. Often follows rays and sharks."),
    ("Tripletail", "Lobotes surinamensis", "Unique fish that floats on its side mimicking debris. Excellent table fare. Found around floating objects and structure."),
    ("Pompano", "Trachinotus carolinus", "Premium table fare with silvery, laterally compressed body. Found on sandy beaches and flats."),
    ("Blue Runner", "Caranx crysos", "Small jack species often found in schools. Good live bait for larger fish. Blue-green coloration on top."),
    ("Pinfish", "Lagodon rhomboides", "Common baitfish with distinctive dark spot. Found around grass beds and structure. Often used as bait for larger fish."),
    ("Grunt", "Haemulon plumieri", "Common reef fish that makes grunting sound. Silver with blue and yellow stripes. Found around structure and reefs."),
];

pub fn fish_species() -> Vec<FishSpecies> {
    let created_date = seeded_at();
    SPECIES
        .iter()
        .zip(1..)
        .map(|(&(name, scientific_name, description), id)| FishSpecies {
            id,
            order: id,
            name: name.to_string(),
            scientific_name: Some(scientific_name.to_string()),
            description: Some(description.to_string()),
            created_date,
        })
        .collect()
}

/// Insert reference rows that are not present yet and advance the id sequences past them.
pub async fn apply(pool: &PgPool) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await?;

    for location in locations() {
        sqlx::query(
            "INSERT INTO locations (id, name, latitude, longitude, description, display_order, created_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) ON CONFLICT (id) DO NOTHING",
        )
        .bind(location.id)
        .bind(&location.name)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.description)
        .bind(location.order)
        .bind(location.created_date)
        .execute(&mut *tx)
        .await?;
    }

    for species in fish_species() {
        sqlx::query(
            "INSERT INTO fish_species (id, display_order, name, scientific_name, description, created_date) \
             VALUES ($1, $2, $3, $4, $5, $6) ON CONFLICT (id) DO NOTHING",
        )
        .bind(species.id)
        .bind(species.order)
        .bind(&species.name)
        .bind(&species.scientific_name)
        .bind(&species.description)
        .bind(species.created_date)
        .execute(&mut *tx)
        .await?;
    }

    for table in ["locations", "fish_species"] {
        sqlx::query(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT COALESCE(MAX(id), 1) FROM {table}))"
        ))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_data_shape() {
        let locations = locations();
        assert_eq!(locations.len(), 4);
        assert_eq!(locations[0].latitude.to_string(), "25.14127");
        assert_eq!(locations[3].longitude.to_string(), "-80.3297222");

        let species = fish_species();
        assert_eq!(species.len(), 20);
        assert_eq!(species[0].name, "Common Snook");
        assert_eq!(species[19].id, 20);
        assert_eq!(species[19].order, 20);
    }
}
