use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Person fields forwarded to the upstream service; everything else in a
/// request body is dropped.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonPayload {
    pub person_id: Value,
    pub nama_lengkap: Value,
    pub jenis_kelamin: Value,
    pub tempat_lahir: Value,
    pub tanggal_lahir: Value,
    pub alamat_lengkap: Value,
    pub no_hp: Value,
    pub ayah_id: Value,
    pub ibu_id: Value,
    pub pasangan_id: Value,
    pub status_darah: Value,
    pub foto: Value,
}

impl PersonPayload {
    /// Whitelist `body`. Missing and `null` fields become `""`; present
    /// values keep their JSON type.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let pick = |field: &str| match body.get(field) {
            None | Some(Value::Null) => Value::String(String::new()),
            Some(value) => value.clone(),
        };

        let payload = Self {
            person_id: pick("person_id"),
            nama_lengkap: pick("nama_lengkap"),
            jenis_kelamin: pick("jenis_kelamin"),
            tempat_lahir: pick("tempat_lahir"),
            tanggal_lahir: pick("tanggal_lahir"),
            alamat_lengkap: pick("alamat_lengkap"),
            no_hp: pick("no_hp"),
            ayah_id: pick("ayah_id"),
            ibu_id: pick("ibu_id"),
            pasangan_id: pick("pasangan_id"),
            status_darah: pick("status_darah"),
            foto: pick("foto"),
        };

        let dropped: Vec<&str> = body
            .keys()
            .map(String::as_str)
            .filter(|k| !PERSON_FIELDS.contains(k))
            .collect();
        if !dropped.is_empty() {
            debug!(?dropped, "ignoring non-whitelisted person fields");
        }

        payload
    }
}

pub const PERSON_FIELDS: [&str; 12] = [
    "person_id",
    "nama_lengkap",
    "jenis_kelamin",
    "tempat_lahir",
    "tanggal_lahir",
    "alamat_lengkap",
    "no_hp",
    "ayah_id",
    "ibu_id",
    "pasangan_id",
    "status_darah",
    "foto",
];
