use serde::Serialize;

/// One CSV record, in the column layout of the scraped dataset.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Record<'a> {
    #[serde(rename = "Property_type")]
    property_type: &'a str,
    area: Option<u32>,
    furnished: &'a str,
    #[serde(rename = "Lease_term")]
    lease_term: Option<&'a str>,
    #[serde(rename = "Parking_type")]
    parking_type: Option<&'a str>,
    heating: &'a str,
    water: &'a str,
    cable: &'a str,
    internet: &'a str,
    electricity: &'a str,
    neighborhood: &'a str,
    price: Option<u32>,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn yes_no(rng: &mut SimpleRng, p_yes: f64) -> &'static str {
    if rng.chance(0.05) {
        ""
    } else if rng.chance(p_yes) {
        "Yes"
    } else {
        "No"
    }
}

fn main() -> anyhow::Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "montreal_housing_with_neighborhoods.csv".to_string());
    let mut rng = SimpleRng::new(42);

    // (borough, listing count, typical rent)
    let boroughs = [
        ("Plateau-Mont-Royal", 60, 1650.0),
        ("Ville-Marie", 85, 1900.0),
        ("Rosemont-La Petite-Patrie", 40, 1450.0),
        ("Côte-des-Neiges-Notre-Dame-de-Grâce", 55, 1500.0),
        ("Le Sud-Ouest", 35, 1600.0),
        ("Verdun", 20, 1400.0),
        ("Ahuntsic-Cartierville", 12, 1250.0),
        ("Outremont", 7, 1750.0),
        ("Lachine", 6, 1150.0),
        ("Anjou", 3, 1100.0),
    ];
    let property_types = ["Apartment", "Apartment", "Apartment", "Condo", "Basement", "Room"];
    let lease_terms = ["12 months", "12 months", "Short term", "Negotiable"];
    let parking = ["Garage", "Street", "Driveway"];

    let mut writer = csv::Writer::from_path(&output_path)?;
    let mut rows = 0;

    for &(borough, count, typical) in &boroughs {
        for _ in 0..count {
            let property_type = rng.pick(&property_types);
            let premium = if property_type == "Condo" { 350.0 } else { 0.0 };
            let price = (rng.gauss(typical + premium, 250.0).max(500.0) / 5.0).round() as u32 * 5;
            let area = rng.gauss(550.0 + (price as f64 - typical) * 0.3, 80.0).max(200.0) as u32;

            writer.serialize(Record {
                property_type,
                area: (!rng.chance(0.4)).then_some(area),
                furnished: yes_no(&mut rng, 0.2),
                lease_term: (!rng.chance(0.2)).then(|| rng.pick(&lease_terms)),
                parking_type: (!rng.chance(0.5)).then(|| rng.pick(&parking)),
                heating: yes_no(&mut rng, 0.6),
                water: yes_no(&mut rng, 0.7),
                cable: yes_no(&mut rng, 0.1),
                internet: yes_no(&mut rng, 0.25),
                electricity: yes_no(&mut rng, 0.3),
                neighborhood: borough,
                price: (!rng.chance(0.05)).then_some(price),
            })?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} listings across {} boroughs to {output_path}", boroughs.len());
    Ok(())
}
