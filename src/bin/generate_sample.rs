use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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
}

/// One generated measurement row.
struct Row {
    site: &'static str,
    weight: Option<f64>,
    temperature: f64,
    batch: i64,
}

fn generate_rows(rng: &mut SimpleRng, count: usize) -> Vec<Row> {
    let sites = [("Lyon", 72.0), ("Nantes", 68.5), ("Lille", 75.0)];
    (0..count)
        .map(|i| {
            let (site, centre) = sites[i % sites.len()];
            // About one weight in twelve is left blank.
            let weight = (rng.next_f64() > 1.0 / 12.0).then(|| rng.gauss(centre, 6.0));
            Row {
                site,
                weight,
                temperature: rng.gauss(21.0, 1.5),
                batch: (i / 25) as i64,
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["site", "poids", "temperature", "lot"])?;
    for row in rows {
        let weight = row.weight.map(|w| format!("{w:.3}")).unwrap_or_default();
        writer.write_record([
            row.site.to_string(),
            weight,
            format!("{:.2}", row.temperature),
            row.batch.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("site", DataType::Utf8, false),
        Field::new("poids", DataType::Float64, true),
        Field::new("temperature", DataType::Float64, false),
        Field::new("lot", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.site))),
            Arc::new(Float64Array::from(rows.iter().map(|r| r.weight).collect::<Vec<_>>())),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.temperature))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.batch))),
        ],
    )?;

    let file = std::fs::File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng, 300);

    write_csv(&rows, "sample_data.csv")?;
    write_parquet(&rows, "sample_data.parquet")?;

    println!(
        "Wrote {} rows ({} blank weights) to sample_data.csv and sample_data.parquet",
        rows.len(),
        rows.iter().filter(|r| r.weight.is_none()).count()
    );
    Ok(())
}
