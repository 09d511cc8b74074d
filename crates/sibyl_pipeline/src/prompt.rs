//! Prompt templates for the two model calls.

use sibyl_database::RowSet;

/// Fill the SQL-generation template with the schema and the user's
/// question.
pub fn sql_generation_prompt(schema: &str, query: &str) -> String {
    format!(
        "You are an expert SQL generator.\n\
         Given a natural language query, translate it into a syntactically correct SQL query.\n\
         The query should be optimized to run in less time.\n\
         \n\
         Database Schema: {schema}\n\
         Natural Language Query: {query}\n\
         \n\
         Important: Do not provide any explanation. ONLY return a ready-to-execute SQL statement.\n\
         \n\
         SQL Query:\n"
    )
}

/// Fill the summarization template with the stringified row set and the
/// original question.
///
/// An empty row set renders as `[]`, so empty and non-empty results are
/// distinguishable in the prompt before the model is ever invoked.
pub fn answer_prompt(rows: &RowSet, query: &str) -> String {
    format!(
        "Given the SQL query result: {rows} and the original user query: {query},\n\
         provide a concise and natural language response that DIRECTLY answers the user's query \
         by describing the returned data.\n\
         The SQL query has been designed to return only the data that fully satisfies ALL the \
         conditions specified in the query.\n\
         \n\
         If the SQL result is empty, respond that there is no data.\n\
         Otherwise, describe the data returned by the query, ensuring that you indicate that \
         those entries all satisfy the conditions of the query.\n"
    )
}
