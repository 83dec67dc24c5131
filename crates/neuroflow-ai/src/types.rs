use serde::{Deserialize, Serialize};

// ─── Request envelope ─────────────────────────────────────────────────────

/// `models/{model}:generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

impl GenerateContentRequest {
    /// Plain prompt with no schema constraint or tools.
    pub fn from_text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::from_text(prompt)],
            system_instruction: None,
            generation_config: None,
            tools: None,
            tool_config: None,
        }
    }

    /// Prompt constrained to a JSON response matching `schema`.
    pub fn json_constrained(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
            ..Self::from_text(prompt)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Response-format constraint. The schema itself is polymorphic per call,
/// so `Value` is correct here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// Tool registration. Only the maps-grounding tool is used.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    #[serde(rename = "googleMaps")]
    pub google_maps: MapsTool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MapsTool {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

/// Geographic coordinate forwarded with an assistance request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

// ─── Response envelope ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }

    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| m.grounding_chunks.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounded source reference. Map references take priority over plain
/// web references when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundingChunk {
    pub maps: Option<ChunkRef>,
    pub web: Option<ChunkRef>,
}

impl GroundingChunk {
    /// The place reference to surface, if this chunk carries a usable one.
    pub fn place(&self) -> Option<(&str, &str)> {
        for candidate in [&self.maps, &self.web] {
            if let Some(chunk) = candidate {
                if let (Some(title), Some(uri)) = (chunk.title.as_deref(), chunk.uri.as_deref()) {
                    return Some((title, uri));
                }
            }
        }
        None
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkRef {
    pub title: Option<String>,
    pub uri: Option<String>,
}

// ─── Typed call payloads ──────────────────────────────────────────────────

/// Classification result as it appears in the constrained JSON completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypePayload {
    pub name: String,
    pub description: String,
    pub neurochemistry: String,
    #[serde(rename = "suggestedSports")]
    pub suggested_sports: Vec<String>,
}

/// One generated journey step. Ids supplied by the service are ignored on
/// purpose; ordering integrity is re-checked by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct StepPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub step_type: String,
}

/// Inputs for one chat-assistance call.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub sport: String,
    /// Description of the step the user is currently stuck on.
    pub step_context: String,
    /// Present only when the user granted location access; omitted on
    /// permission denial (the request degrades, it does not fail).
    pub location: Option<LatLng>,
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let req = GenerateContentRequest::json_constrained(
            "prompt",
            serde_json::json!({"type": "OBJECT"}),
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert!(json.get("systemInstruction").is_none());
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn tool_config_wire_shape() {
        let req = GenerateContentRequest {
            tools: Some(vec![Tool {
                google_maps: MapsTool::default(),
            }]),
            tool_config: Some(ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: -23.55,
                        longitude: -46.63,
                    },
                },
            }),
            ..GenerateContentRequest::from_text("where?")
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["tools"][0].get("googleMaps").is_some());
        assert_eq!(json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"], -23.55);
    }

    #[test]
    fn first_text_joins_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "hello "}, {"text": "world"}]}}]
        }))
        .unwrap();
        assert_eq!(resp.first_text().unwrap(), "hello world");
    }

    #[test]
    fn first_text_none_when_no_candidates() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.first_text().is_none());
    }

    #[test]
    fn chunk_prefers_maps_over_web() {
        let chunk: GroundingChunk = serde_json::from_value(serde_json::json!({
            "maps": {"title": "City Pool", "uri": "https://maps.example/pool"},
            "web": {"title": "Pool blog", "uri": "https://example.com"}
        }))
        .unwrap();
        assert_eq!(chunk.place().unwrap().0, "City Pool");
    }

    #[test]
    fn chunk_falls_back_to_web() {
        let chunk: GroundingChunk = serde_json::from_value(serde_json::json!({
            "maps": null,
            "web": {"title": "Track guide", "uri": "https://example.com/track"}
        }))
        .unwrap();
        assert_eq!(chunk.place().unwrap().1, "https://example.com/track");
    }

    #[test]
    fn chunk_without_refs_yields_nothing() {
        let chunk: GroundingChunk =
            serde_json::from_value(serde_json::json!({"maps": {"title": "x"}})).unwrap();
        assert!(chunk.place().is_none());
    }

    #[test]
    fn step_payload_reads_type_field() {
        let step: StepPayload = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Shoes",
            "description": "Grab trail shoes.",
            "type": "equipment"
        }))
        .unwrap();
        assert_eq!(step.step_type, "equipment");
    }
}
