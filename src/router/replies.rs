//! Fixed reply texts and the priming conversation.

use crate::types::HistoryTurn;

pub const DISABLED_ACK: &str =
    "Bot desativado para todos os servidores. Não responderei até ser ativado novamente.";
pub const ENABLED_ACK: &str =
    "Bot ativado para todos os servidores. Estou pronto para responder!";
pub const GREETING: &str = "Olá! Como posso ajudar você hoje?";
pub const EMPTY_DIRECT_MESSAGE: &str =
    "Você me mandou uma mensagem vazia. Como posso ajudar?";
pub const SERVICE_UNAVAILABLE: &str = "Desculpe, a funcionalidade de IA não está disponível \
     porque a chave GEMINI_API_KEY não foi configurada.";
pub const NO_USEFUL_RESPONSE: &str = "Não consegui obter uma resposta útil da IA. Tente \
     novamente ou formule a pergunta de outra maneira.";
pub const COMPLETION_FAILED: &str = "Desculpe, ocorreu um erro ao tentar processar sua \
     solicitação com a IA. Por favor, tente novamente mais tarde.";

const PERSONA: &str = "Você é um assistente prestativo e amigável, especializado em ajudar com \
     dúvidas gerais, fornecer informações e auxiliar na criação e depuração de código, \
     incluindo Lua. Seu objetivo é ser o mais útil possível e fornecer respostas detalhadas \
     e precisas.";
const PERSONA_ACK: &str = "Entendido! Estou pronto para ajudar com qualquer pergunta ou \
     desafio de codificação que você possa ter. Como posso ser útil hoje?";

/// Token budget for a single generated reply.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Two-turn preamble that sets the assistant's persona.
#[must_use]
pub fn priming_history() -> Vec<HistoryTurn> {
    vec![HistoryTurn::user(PERSONA), HistoryTurn::assistant(PERSONA_ACK)]
}
