#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sumario::application::ports::{
    ClassifierError, DocumentParser, LanguageClassifier, LlmClient, LlmClientError,
    ParsedDocument, ParserError, ResponseSchema,
};
use sumario::application::services::{
    DEFAULT_EXCERPT_CHARS, ExtractionPolicy, LanguageGate, SummarizationService,
    SummaryGenerator, SummaryRequestBuilder, TextExtractor,
};
use sumario::domain::DocumentKind;

pub const SPANISH_TEXT: &str = "La energía solar es una fuente renovable que se obtiene de la \
    radiación del sol. En los últimos años, su uso ha crecido de forma notable en todo el mundo \
    gracias a la reducción de costes y a las políticas públicas de apoyo.";

pub const ENGLISH_TEXT: &str = "The quarterly report describes how the engineering team improved \
    the deployment pipeline, reduced build times and shipped three major features before the \
    deadline.";

/// Exactly 40 characters.
pub const SHORT_TEXT: &str = "Texto breve de apenas cuarenta letras...";

pub const VALID_SUMMARY_JSON: &str = r#"{"summaryTitle":"Energía solar","summaryText":"La energía solar crece gracias a la reducción de costes.","summaryMethod":"mixed"}"#;

pub const PDF_BYTES: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n";
pub const ZIP_BYTES: &[u8] = b"PK\x03\x04\x14\x00\x00\x00stub";

const HANG: Duration = Duration::from_secs(10);
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(100);

pub enum ParseOutcome {
    Text {
        text: String,
        page_count: Option<usize>,
    },
    Fail,
    Hang,
}

pub struct StubParser {
    outcome: ParseOutcome,
    calls: AtomicUsize,
}

impl StubParser {
    pub fn text(text: &str, page_count: Option<usize>) -> Arc<Self> {
        Arc::new(Self {
            outcome: ParseOutcome::Text {
                text: text.to_string(),
                page_count,
            },
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: ParseOutcome::Fail,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            outcome: ParseOutcome::Hang,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DocumentParser for StubParser {
    async fn parse(&self, _data: &[u8]) -> Result<ParsedDocument, ParserError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            ParseOutcome::Text { text, page_count } => Ok(ParsedDocument {
                text: text.clone(),
                page_count: *page_count,
            }),
            ParseOutcome::Fail => Err(ParserError::Malformed("stub failure".to_string())),
            ParseOutcome::Hang => {
                tokio::time::sleep(HANG).await;
                Err(ParserError::TimedOut)
            }
        }
    }
}

pub enum LlmOutcome {
    Reply(String),
    Fail,
    Hang,
}

pub struct StubLlmClient {
    outcome: LlmOutcome,
    calls: AtomicUsize,
    last_user_prompt: Mutex<Option<String>>,
}

impl StubLlmClient {
    pub fn replying(reply: &str) -> Arc<Self> {
        Self::with(LlmOutcome::Reply(reply.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Self::with(LlmOutcome::Fail)
    }

    pub fn hanging() -> Arc<Self> {
        Self::with(LlmOutcome::Hang)
    }

    fn with(outcome: LlmOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_user_prompt: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_user_prompt(&self) -> Option<String> {
        self.last_user_prompt.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        _schema: &ResponseSchema,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user_prompt.lock().unwrap() = Some(user_prompt.to_string());
        match &self.outcome {
            LlmOutcome::Reply(reply) => Ok(reply.clone()),
            LlmOutcome::Fail => Err(LlmClientError::ApiRequestFailed("stub failure".to_string())),
            LlmOutcome::Hang => {
                tokio::time::sleep(HANG).await;
                Err(LlmClientError::Timeout)
            }
        }
    }
}

pub struct StubClassifier {
    verdict: Option<bool>,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn answering(verdict: bool) -> Arc<Self> {
        Arc::new(Self {
            verdict: Some(verdict),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            verdict: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LanguageClassifier for StubClassifier {
    async fn is_spanish(&self, _text: &str) -> Result<bool, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict
            .ok_or_else(|| ClassifierError::RequestFailed("stub failure".to_string()))
    }
}

pub fn extractor(
    pdf: &Arc<StubParser>,
    docx: &Arc<StubParser>,
    policy: ExtractionPolicy,
) -> TextExtractor {
    TextExtractor::new(
        vec![
            (DocumentKind::Pdf, Arc::clone(pdf) as Arc<dyn DocumentParser>),
            (DocumentKind::Docx, Arc::clone(docx) as Arc<dyn DocumentParser>),
        ],
        policy,
    )
}

pub fn gate(classifier: &Arc<StubClassifier>) -> LanguageGate {
    LanguageGate::new(
        Some(Arc::clone(classifier) as Arc<dyn LanguageClassifier>),
        DEFAULT_EXCERPT_CHARS,
        SHORT_TIMEOUT,
    )
}

/// A fully wired pipeline whose collaborators are all observable stubs.
pub struct Harness {
    pub service: SummarizationService<StubLlmClient>,
    pub pdf: Arc<StubParser>,
    pub docx: Arc<StubParser>,
    pub classifier: Arc<StubClassifier>,
    pub llm: Arc<StubLlmClient>,
}

impl Harness {
    pub fn new(
        pdf: Arc<StubParser>,
        docx: Arc<StubParser>,
        classifier: Arc<StubClassifier>,
        llm: Arc<StubLlmClient>,
    ) -> Self {
        let service = SummarizationService::new(
            extractor(&pdf, &docx, ExtractionPolicy::default()),
            gate(&classifier),
            SummaryRequestBuilder::default(),
            SummaryGenerator::new(Arc::clone(&llm), SHORT_TIMEOUT),
        );
        Self {
            service,
            pdf,
            docx,
            classifier,
            llm,
        }
    }

    /// Spanish PDF in, valid summary out.
    pub fn happy_path() -> Self {
        Self::new(
            StubParser::text(SPANISH_TEXT, Some(3)),
            StubParser::failing(),
            StubClassifier::answering(true),
            StubLlmClient::replying(VALID_SUMMARY_JSON),
        )
    }
}
