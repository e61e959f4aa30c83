use std::sync::Arc;

use async_trait::async_trait;
use hmap_model::TemplateSchema;
use hmap_oracle::{HeaderOracle, OracleError, build_mapping_prompt};

struct CannedOracle {
    reply: String,
}

#[async_trait]
impl HeaderOracle for CannedOracle {
    async fn propose_mapping(&self, _prompt: &str) -> Result<String, OracleError> {
        Ok(self.reply.clone())
    }
}

struct FailingOracle;

#[async_trait]
impl HeaderOracle for FailingOracle {
    async fn propose_mapping(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })
    }
}

#[tokio::test]
async fn canned_oracle_dispatches_through_trait_object() {
    let oracle: Arc<dyn HeaderOracle> = Arc::new(CannedOracle {
        reply: r#"{"Ctr No": "Contract Number"}"#.to_string(),
    });
    let template = TemplateSchema::default_template();
    let prompt = build_mapping_prompt(&template, &["Ctr No".to_string()]);
    let reply = oracle.propose_mapping(&prompt).await.unwrap();
    assert!(reply.contains("Contract Number"));
}

#[tokio::test]
async fn oracle_errors_carry_status_and_message() {
    let oracle: Arc<dyn HeaderOracle> = Arc::new(FailingOracle);
    let err = oracle.propose_mapping("prompt").await.unwrap_err();
    assert_eq!(err.to_string(), "API error (429): quota exceeded");
}
