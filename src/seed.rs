use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::auth::password::hash_password;

pub async fn run(db: &PgPool) -> anyhow::Result<()> {
    seed_users(db).await?;
    seed_internet_packages(db).await?;
    Ok(())
}

async fn seed_users(db: &PgPool) -> anyhow::Result<()> {
    let users = [
        ("Admin", "admin@netpack.local", random_password(), true),
        ("John Doe", "john.doe@netpack.local", random_password(), false),
        ("Jane Doe", "jane.doe@netpack.local", "password123".to_string(), false),
    ];

    for (name, email, password, is_admin) in users {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(db)
            .await?;
        if count > 0 {
            info!(email, "user already exists");
            continue;
        }

        let hash = hash_password(&password)?;
        let result = sqlx::query(
            "INSERT INTO users (name, email, password_hash, is_admin) VALUES ($1, $2, $3, $4)",
        )
        .bind(name)
        .bind(email)
        .bind(&hash)
        .bind(is_admin)
        .execute(db)
        .await;

        match result {
            Ok(_) => info!(email, "seeded user"),
            Err(e) => warn!(email, error = %e, "failed to seed user"),
        }
    }
    Ok(())
}

async fn seed_internet_packages(db: &PgPool) -> anyhow::Result<()> {
    let packages = [
        (
            "Super Seru",
            "Paket Super Seru adalah paket internet yang menawarkan kuota besar dengan kecepatan tinggi, cocok untuk streaming, gaming, dan browsing tanpa batas.",
            120_000.0,
        ),
        (
            "StreaMAX",
            "Paket StreaMAX dirancang khusus untuk pengguna yang suka streaming video dan musik dengan kualitas HD tanpa buffering.",
            200_000.0,
        ),
        (
            "Internet Sakti",
            "Paket Internet Sakti memberikan kuota hemat dengan harga terjangkau, ideal untuk pengguna yang membutuhkan internet untuk kebutuhan sehari-hari.",
            80_000.0,
        ),
        (
            "Paket Serbu Sahur",
            "Paket Serbu Sahur adalah paket internet khusus yang memberikan kuota besar dengan harga hemat, aktif pada jam sahur untuk mendukung aktivitas malam hari.",
            50_000.0,
        ),
        (
            "Internet OMG!",
            "Paket Internet OMG! menawarkan kuota besar untuk semua aplikasi favorit Anda, termasuk media sosial, streaming, dan gaming, dengan kecepatan tinggi.",
            150_000.0,
        ),
        (
            "Kuota Ketengan",
            "Kuota Ketengan adalah paket internet fleksibel dengan kuota kecil yang cocok untuk kebutuhan mendadak atau penggunaan singkat.",
            25_000.0,
        ),
    ];

    for (name, description, price) in packages {
        let result = sqlx::query(
            "INSERT INTO internet_packages (name, description, price) VALUES ($1, $2, $3)",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .execute(db)
        .await;

        match result {
            Ok(_) => info!(name, "seeded internet package"),
            Err(e) => warn!(name, error = %e, "failed to seed internet package"),
        }
    }
    Ok(())
}

fn random_password() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}
