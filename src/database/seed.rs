use crate::error::Result;
use sqlx::SqlitePool;

pub struct SeedCandidate {
    pub name: &'static str,
    pub nationality: &'static str,
    pub major: &'static str,
    pub experience_years: i64,
    pub gender: &'static str,
    pub city: &'static str,
    pub cv_link: &'static str,
}

pub const SEED_CANDIDATES: [SeedCandidate; 10] = [
    SeedCandidate {
        name: "محمد الغامدي",
        nationality: "سعودي",
        major: "هندسة حاسب",
        experience_years: 5,
        gender: "ذكر",
        city: "الرياض",
        cv_link: "https://example.com/cv/mohammed-alghamdi.pdf",
    },
    SeedCandidate {
        name: "فاطمة العتيبي",
        nationality: "سعودي",
        major: "تسويق",
        experience_years: 3,
        gender: "انثى",
        city: "جدة",
        cv_link: "https://example.com/cv/fatima-alotaibi.pdf",
    },
    SeedCandidate {
        name: "أحمد محمود",
        nationality: "مصري",
        major: "هندسة حاسب",
        experience_years: 7,
        gender: "ذكر",
        city: "الرياض",
        cv_link: "https://example.com/cv/ahmed-mahmoud.pdf",
    },
    SeedCandidate {
        name: "نورة الشمري",
        nationality: "سعودي",
        major: "علم نفس",
        experience_years: 2,
        gender: "انثى",
        city: "الدمام",
        cv_link: "https://example.com/cv/noura-alshammari.pdf",
    },
    SeedCandidate {
        name: "خالد السعيد",
        nationality: "سعودي",
        major: "إدارة أعمال",
        experience_years: 10,
        gender: "ذكر",
        city: "الرياض",
        cv_link: "https://example.com/cv/khaled-alsaeed.pdf",
    },
    SeedCandidate {
        name: "سارة الحربي",
        nationality: "سعودي",
        major: "هندسة حاسب",
        experience_years: 4,
        gender: "انثى",
        city: "جدة",
        cv_link: "https://example.com/cv/sara-alharbi.pdf",
    },
    SeedCandidate {
        name: "يوسف إبراهيم",
        nationality: "مصري",
        major: "تسويق",
        experience_years: 6,
        gender: "ذكر",
        city: "الرياض",
        cv_link: "https://example.com/cv/youssef-ibrahim.pdf",
    },
    SeedCandidate {
        name: "ريم القحطاني",
        nationality: "سعودي",
        major: "موارد بشرية",
        experience_years: 5,
        gender: "انثى",
        city: "الخبر",
        cv_link: "https://example.com/cv/reem-alqahtani.pdf",
    },
    SeedCandidate {
        name: "عبدالله الدوسري",
        nationality: "سعودي",
        major: "هندسة حاسب",
        experience_years: 8,
        gender: "ذكر",
        city: "الرياض",
        cv_link: "https://example.com/cv/abdullah-aldosari.pdf",
    },
    SeedCandidate {
        name: "هند الزهراني",
        nationality: "سعودي",
        major: "تصميم جرافيك",
        experience_years: 3,
        gender: "انثى",
        city: "جدة",
        cv_link: "https://example.com/cv/hind-alzahrani.pdf",
    },
];

/// Clears the candidates table and loads the demo profiles. Returns the
/// number of rows inserted.
pub async fn seed_candidates(pool: &SqlitePool) -> Result<u64> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM candidates")
        .execute(&mut *tx)
        .await?;

    let mut inserted = 0;
    for candidate in SEED_CANDIDATES.iter() {
        sqlx::query(
            r#"
            INSERT INTO candidates (name, nationality, major, experience_years, gender, city, cv_link)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(candidate.name)
        .bind(candidate.nationality)
        .bind(candidate.major)
        .bind(candidate.experience_years)
        .bind(candidate.gender)
        .bind(candidate.city)
        .bind(candidate.cv_link)
        .execute(&mut *tx)
        .await?;

        tracing::info!(
            "Added: {} - {} - {}",
            candidate.name,
            candidate.major,
            candidate.city
        );
        inserted += 1;
    }

    tx.commit().await?;
    Ok(inserted)
}
